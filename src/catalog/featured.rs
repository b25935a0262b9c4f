use chrono::{DateTime, Utc};

use super::CatalogProduct;

/// Decide the store write for a featured toggle. `None` means the product is
/// already in the requested state and the toggle is a no-op; in particular an
/// existing `featured_at` stamp is never refreshed.
pub fn featured_transition(
    currently_featured: bool,
    want_featured: bool,
    now: DateTime<Utc>,
) -> Option<(bool, Option<DateTime<Utc>>)> {
    if currently_featured == want_featured {
        return None;
    }

    if want_featured {
        Some((true, Some(now)))
    } else {
        Some((false, None))
    }
}

/// Featured products, most recently featured first, creation time as the
/// tiebreak.
pub fn featured_view(catalog: &[CatalogProduct]) -> Vec<CatalogProduct> {
    let mut featured: Vec<CatalogProduct> = catalog
        .iter()
        .filter(|p| p.is_featured)
        .cloned()
        .collect();

    featured.sort_by(|a, b| {
        b.featured_at
            .cmp(&a.featured_at)
            .then(b.created_at.cmp(&a.created_at))
    });

    featured
}

/// Split the catalog into (featured, unfeatured) views, the featured half
/// ordered as in [`featured_view`].
pub fn partition_featured(catalog: &[CatalogProduct]) -> (Vec<CatalogProduct>, Vec<CatalogProduct>) {
    let featured = featured_view(catalog);
    let unfeatured = catalog
        .iter()
        .filter(|p| !p.is_featured)
        .cloned()
        .collect();

    (featured, unfeatured)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testutil::product;
    use chrono::TimeZone;
    use uuid::Uuid;

    #[test]
    fn featuring_an_unfeatured_product_stamps_now() {
        let now = Utc::now();
        assert_eq!(featured_transition(false, true, now), Some((true, Some(now))));
    }

    #[test]
    fn unfeaturing_clears_the_stamp() {
        assert_eq!(featured_transition(true, false, Utc::now()), Some((false, None)));
    }

    #[test]
    fn toggles_are_idempotent() {
        let now = Utc::now();

        // Applying add twice: the first transition lands the product in the
        // featured state, the second is a no-op that keeps the stamp.
        let (flag, stamp) = featured_transition(false, true, now).unwrap();
        assert_eq!(featured_transition(flag, true, Utc::now()), None);
        assert_eq!(stamp, Some(now));

        // Same for remove.
        let (flag, stamp) = featured_transition(true, false, now).unwrap();
        assert_eq!(featured_transition(flag, false, Utc::now()), None);
        assert_eq!(stamp, None);
    }

    #[test]
    fn ordered_by_featured_at_then_created_at_descending() {
        let category = Uuid::new_v4();
        let stamp = |day| Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap();

        let mut oldest = product("Dettol", "99.00", category, "First Aid");
        oldest.is_featured = true;
        oldest.featured_at = Some(stamp(1));

        let mut newest = product("Savlon", "89.00", category, "First Aid");
        newest.is_featured = true;
        newest.featured_at = Some(stamp(10));

        let mut tied_older = product("Volini", "150.00", category, "Pain Relief");
        tied_older.is_featured = true;
        tied_older.featured_at = Some(stamp(5));
        tied_older.created_at = stamp(2);

        let mut tied_newer = product("Moov", "140.00", category, "Pain Relief");
        tied_newer.is_featured = true;
        tied_newer.featured_at = Some(stamp(5));
        tied_newer.created_at = stamp(3);

        let plain = product("Gauze", "30.00", category, "First Aid");

        let view = featured_view(&[oldest, newest, tied_older, tied_newer, plain]);
        let names: Vec<&str> = view.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Savlon", "Moov", "Volini", "Dettol"]);
    }

    #[test]
    fn partition_covers_the_catalog_without_overlap() {
        let category = Uuid::new_v4();
        let mut starred = product("Dolo 650", "30.00", category, "Medicines");
        starred.is_featured = true;
        starred.featured_at = Some(Utc::now());
        let plain = product("ORS Sachet", "18.00", category, "Medicines");

        let catalog = [starred, plain];
        let (featured, unfeatured) = partition_featured(&catalog);

        assert_eq!(featured.len() + unfeatured.len(), catalog.len());
        assert!(featured.iter().all(|p| p.is_featured));
        assert!(unfeatured.iter().all(|p| !p.is_featured));
    }
}
