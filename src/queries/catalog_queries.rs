use sqlx::PgPool;

use crate::{catalog::CatalogProduct, error::Result};

/// Full catalog snapshot for the in-memory search/filter engine. Price comes
/// back as its wire string; category names are joined in for the matcher.
pub async fn load_catalog(pool: &PgPool) -> Result<Vec<CatalogProduct>> {
    let catalog = sqlx::query_as::<_, CatalogProduct>(
        "SELECT p.id, p.name, p.price::TEXT AS price, p.category_id,
                c.name AS category_name, p.color_id, p.is_featured,
                p.featured_at, p.created_at
         FROM products p
         INNER JOIN categories c ON c.id = p.category_id
         ORDER BY p.created_at ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(catalog)
}
