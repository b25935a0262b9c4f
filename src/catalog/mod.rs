mod cache;
mod featured;
mod filters;
mod pricing;
mod search;

pub use cache::{CatalogCache, StagedToggle, TogglePhase};
pub use featured::{featured_transition, featured_view, partition_featured};
pub use filters::{apply_filters, FilterParams, SortKey};
pub use pricing::{amount_saved, discounted_price, format_inr, parse_price};
pub use search::{search, SearchOutcome};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One product as the storefront sees it: a flat snapshot row with the
/// category name joined in and the price kept as its wire string.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CatalogProduct {
    pub id: Uuid,
    pub name: String,
    pub price: String,
    pub category_id: Uuid,
    pub category_name: String,
    pub color_id: Option<Uuid>,
    pub is_featured: bool,
    pub featured_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
pub(crate) mod testutil {
    use super::CatalogProduct;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    pub fn product(name: &str, price: &str, category_id: Uuid, category_name: &str) -> CatalogProduct {
        CatalogProduct {
            id: Uuid::new_v4(),
            name: name.to_string(),
            price: price.to_string(),
            category_id,
            category_name: category_name.to_string(),
            color_id: None,
            is_featured: false,
            featured_at: None,
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }
}
