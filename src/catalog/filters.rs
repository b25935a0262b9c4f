use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{parse_price, CatalogProduct};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParams {
    pub category_id: Option<Uuid>,
    pub price_min: Decimal,
    pub price_max: Decimal,
    pub sort: SortKey,
}

impl FilterParams {
    /// Reset state: no category, name ascending, price window covering the
    /// whole catalog (0 up to the maximum price seen).
    pub fn reset(catalog: &[CatalogProduct]) -> Self {
        let price_max = catalog
            .iter()
            .map(|p| parse_price(&p.price))
            .max()
            .unwrap_or(Decimal::ZERO);

        Self {
            category_id: None,
            price_min: Decimal::ZERO,
            price_max,
            sort: SortKey::default(),
        }
    }
}

/// Filter then sort an in-memory catalog snapshot. The sort is stable, so
/// products comparing equal keep their input order.
pub fn apply_filters(catalog: &[CatalogProduct], params: &FilterParams) -> Vec<CatalogProduct> {
    let mut result: Vec<CatalogProduct> = catalog
        .iter()
        .filter(|p| match params.category_id {
            Some(category_id) => p.category_id == category_id,
            None => true,
        })
        .filter(|p| {
            let price = parse_price(&p.price);
            price >= params.price_min && price <= params.price_max
        })
        .cloned()
        .collect();

    match params.sort {
        SortKey::NameAsc => result.sort_by(|a, b| cmp_names(&a.name, &b.name)),
        SortKey::NameDesc => result.sort_by(|a, b| cmp_names(&b.name, &a.name)),
        SortKey::PriceAsc => result.sort_by(|a, b| parse_price(&a.price).cmp(&parse_price(&b.price))),
        SortKey::PriceDesc => result.sort_by(|a, b| parse_price(&b.price).cmp(&parse_price(&a.price))),
    }

    result
}

// Case-insensitive Unicode comparison; full collation is out of scope.
fn cmp_names(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testutil::product;
    use rust_decimal_macros::dec;

    fn shelf() -> Vec<CatalogProduct> {
        let medicines = Uuid::new_v4();
        let care = Uuid::new_v4();
        vec![
            product("Zincovit", "150.00", medicines, "Medicines"),
            product("aspirin", "25.00", medicines, "Medicines"),
            product("Band-Aid", "45.00", care, "First Aid"),
            product("Burnol", "45.00", care, "First Aid"),
        ]
    }

    #[test]
    fn reset_spans_the_whole_catalog() {
        let catalog = shelf();
        let params = FilterParams::reset(&catalog);
        assert_eq!(params.category_id, None);
        assert_eq!(params.sort, SortKey::NameAsc);
        assert_eq!(params.price_min, Decimal::ZERO);
        assert_eq!(params.price_max, dec!(150.00));
        assert_eq!(apply_filters(&catalog, &params).len(), catalog.len());
    }

    #[test]
    fn reset_on_empty_catalog_is_zeroed() {
        let params = FilterParams::reset(&[]);
        assert_eq!(params.price_max, Decimal::ZERO);
    }

    #[test]
    fn category_filter_is_exact() {
        let catalog = shelf();
        let care = catalog[2].category_id;
        let mut params = FilterParams::reset(&catalog);
        params.category_id = Some(care);

        let result = apply_filters(&catalog, &params);
        assert!(result.iter().all(|p| p.category_id == care));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let catalog = shelf();
        let mut params = FilterParams::reset(&catalog);
        params.price_min = dec!(25.00);
        params.price_max = dec!(45.00);

        let result = apply_filters(&catalog, &params);
        let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["aspirin", "Band-Aid", "Burnol"]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let catalog = shelf();
        let params = FilterParams::reset(&catalog);
        let result = apply_filters(&catalog, &params);
        let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["aspirin", "Band-Aid", "Burnol", "Zincovit"]);
    }

    #[test]
    fn price_ties_keep_input_order() {
        let catalog = shelf();
        let mut params = FilterParams::reset(&catalog);
        params.sort = SortKey::PriceAsc;

        let result = apply_filters(&catalog, &params);
        let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
        // Band-Aid and Burnol both cost 45.00; input order must survive.
        assert_eq!(names, ["aspirin", "Band-Aid", "Burnol", "Zincovit"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = shelf();
        let mut params = FilterParams::reset(&catalog);
        params.price_max = dec!(50.00);

        let once = apply_filters(&catalog, &params);
        let twice = apply_filters(&once, &params);
        let once_names: Vec<&str> = once.iter().map(|p| p.name.as_str()).collect();
        let twice_names: Vec<&str> = twice.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(once_names, twice_names);
    }

    #[test]
    fn sorting_is_stable_under_repetition() {
        let catalog = shelf();
        for sort in [
            SortKey::NameAsc,
            SortKey::NameDesc,
            SortKey::PriceAsc,
            SortKey::PriceDesc,
        ] {
            let mut params = FilterParams::reset(&catalog);
            params.sort = sort;

            let once = apply_filters(&catalog, &params);
            let twice = apply_filters(&once, &params);
            let once_ids: Vec<_> = once.iter().map(|p| p.id).collect();
            let twice_ids: Vec<_> = twice.iter().map(|p| p.id).collect();
            assert_eq!(once_ids, twice_ids, "sort {:?} is not stable", sort);
        }
    }

    #[test]
    fn sort_key_wire_names_are_kebab_case() {
        assert_eq!(
            serde_json::from_str::<SortKey>("\"name-asc\"").unwrap(),
            SortKey::NameAsc
        );
        assert_eq!(
            serde_json::from_str::<SortKey>("\"price-desc\"").unwrap(),
            SortKey::PriceDesc
        );
    }
}
