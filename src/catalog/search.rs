use std::collections::HashSet;

use serde::Serialize;
use uuid::Uuid;

use super::CatalogProduct;

#[derive(Debug, Serialize)]
pub struct SearchOutcome {
    pub matches: Vec<CatalogProduct>,
    pub related_products: Vec<CatalogProduct>,
}

impl SearchOutcome {
    fn empty() -> Self {
        Self {
            matches: Vec::new(),
            related_products: Vec::new(),
        }
    }
}

/// Free-text catalog search.
///
/// `matches` is the union of name-substring matches and category-name
/// matches, name matches first, de-duplicated by id in first-seen order.
/// `related_products` are the remaining products sharing both category and
/// color with at least one match. A product with no color counts as sharing
/// "no color" with another colorless product.
pub fn search(catalog: &[CatalogProduct], query: &str) -> SearchOutcome {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return SearchOutcome::empty();
    }

    let mut seen: HashSet<Uuid> = HashSet::new();
    let mut matches: Vec<CatalogProduct> = Vec::new();

    for product in catalog {
        if product.name.to_lowercase().contains(&query) && seen.insert(product.id) {
            matches.push(product.clone());
        }
    }

    for product in catalog {
        if product.category_name.to_lowercase().contains(&query) && seen.insert(product.id) {
            matches.push(product.clone());
        }
    }

    let match_keys: HashSet<(Uuid, Option<Uuid>)> = matches
        .iter()
        .map(|m| (m.category_id, m.color_id))
        .collect();

    let related_products = catalog
        .iter()
        .filter(|p| !seen.contains(&p.id) && match_keys.contains(&(p.category_id, p.color_id)))
        .cloned()
        .collect();

    SearchOutcome {
        matches,
        related_products,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testutil::product;
    use uuid::Uuid;

    fn pharmacy_catalog() -> Vec<CatalogProduct> {
        let medicines = Uuid::new_v4();
        let personal_care = Uuid::new_v4();
        vec![
            product("Paracetamol", "20.00", medicines, "Medicines"),
            product("Panadol", "35.00", medicines, "Medicines"),
            product("Shampoo", "120.00", personal_care, "Personal Care"),
        ]
    }

    #[test]
    fn empty_and_whitespace_queries_match_nothing() {
        let catalog = pharmacy_catalog();
        for q in ["", "   ", "\t\n"] {
            let outcome = search(&catalog, q);
            assert!(outcome.matches.is_empty());
            assert!(outcome.related_products.is_empty());
        }
    }

    #[test]
    fn pan_matches_panadol_only() {
        let catalog = pharmacy_catalog();
        let outcome = search(&catalog, "pan");
        let names: Vec<&str> = outcome.matches.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Panadol"]);
    }

    #[test]
    fn para_matches_paracetamol_only() {
        let catalog = pharmacy_catalog();
        let outcome = search(&catalog, "para");
        let names: Vec<&str> = outcome.matches.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Paracetamol"]);
    }

    #[test]
    fn query_is_case_insensitive_and_trimmed() {
        let catalog = pharmacy_catalog();
        let outcome = search(&catalog, "  PANADOL  ");
        assert_eq!(outcome.matches.len(), 1);
        assert_eq!(outcome.matches[0].name, "Panadol");
    }

    #[test]
    fn category_matches_follow_name_matches_without_duplicates() {
        let medicines = Uuid::new_v4();
        let catalog = vec![
            product("Cough Syrup", "90.00", medicines, "Medicines"),
            product("Medikit Bandage", "45.00", medicines, "First Aid"),
        ];
        // "medi" hits "Medikit Bandage" by name and everything in "Medicines"
        // by category; the name match must come first and appear once.
        let outcome = search(&catalog, "medi");
        let names: Vec<&str> = outcome.matches.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Medikit Bandage", "Cough Syrup"]);
    }

    #[test]
    fn related_share_category_and_color_and_exclude_matches() {
        let medicines = Uuid::new_v4();
        let red = Uuid::new_v4();
        let blue = Uuid::new_v4();

        let mut panadol = product("Panadol", "35.00", medicines, "Medicines");
        panadol.color_id = Some(red);
        let mut same_key = product("Crocin", "30.00", medicines, "Medicines");
        same_key.color_id = Some(red);
        let mut other_color = product("Aspirin", "25.00", medicines, "Medicines");
        other_color.color_id = Some(blue);

        let outcome = search(&[panadol, same_key, other_color], "panadol");
        let related: Vec<&str> = outcome
            .related_products
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(related, ["Crocin"]);
    }

    #[test]
    fn colorless_products_in_matched_category_are_related() {
        let catalog = pharmacy_catalog();
        let outcome = search(&catalog, "pan");
        let related: Vec<&str> = outcome
            .related_products
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(related, ["Paracetamol"]);
    }

    #[test]
    fn no_related_product_is_also_a_match() {
        let catalog = pharmacy_catalog();
        let outcome = search(&catalog, "medicines");
        let match_ids: Vec<Uuid> = outcome.matches.iter().map(|p| p.id).collect();
        for related in &outcome.related_products {
            assert!(!match_ids.contains(&related.id));
        }
    }
}
