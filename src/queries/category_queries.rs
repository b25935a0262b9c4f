use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::Result,
    models::{Category, CreateCategoryRequest},
};

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Category>> {
    let category = sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(category)
}

/// Case-insensitive unique-name lookup.
pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Category>> {
    let category =
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE LOWER(name) = LOWER($1)")
            .bind(name)
            .fetch_optional(pool)
            .await?;

    Ok(category)
}

pub async fn get_all(pool: &PgPool) -> Result<Vec<Category>> {
    let categories = sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY name ASC")
        .fetch_all(pool)
        .await?;

    Ok(categories)
}

pub async fn create_category(
    pool: &PgPool,
    req: &CreateCategoryRequest,
    slug: &str,
) -> Result<Category> {
    let category = sqlx::query_as::<_, Category>(
        "INSERT INTO categories (name, slug, image_url)
         VALUES ($1, $2, $3)
         RETURNING *",
    )
    .bind(req.name.trim())
    .bind(slug)
    .bind(&req.image_url)
    .fetch_one(pool)
    .await?;

    Ok(category)
}

pub async fn update_category(
    pool: &PgPool,
    id: Uuid,
    name: Option<&str>,
    slug: Option<&str>,
    image_url: Option<&str>,
) -> Result<Option<Category>> {
    let mut query_builder = sqlx::QueryBuilder::<sqlx::Postgres>::new("UPDATE categories SET ");
    let mut has_fields = false;

    if let Some(name) = name {
        query_builder.push("name = ");
        query_builder.push_bind(name.trim());
        has_fields = true;
    }

    if let Some(slug) = slug {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("slug = ");
        query_builder.push_bind(slug);
        has_fields = true;
    }

    if let Some(image_url) = image_url {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("image_url = ");
        query_builder.push_bind(image_url);
        has_fields = true;
    }

    if !has_fields {
        return find_by_id(pool, id).await;
    }

    query_builder.push(", updated_at = NOW() WHERE id = ");
    query_builder.push_bind(id);
    query_builder.push(" RETURNING *");

    let category = query_builder
        .build_query_as::<Category>()
        .fetch_optional(pool)
        .await?;

    Ok(category)
}

pub async fn delete_category(pool: &PgPool, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM categories WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
