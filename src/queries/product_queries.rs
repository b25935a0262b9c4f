use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::Result,
    models::{CreateProductRequest, ImageInput, Product, ProductImage, UpdateProductRequest},
};

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

pub async fn find_images_by_product_id(pool: &PgPool, id: Uuid) -> Result<Vec<ProductImage>> {
    let images = sqlx::query_as::<_, ProductImage>(
        "SELECT product_id, url, position
         FROM product_images
         WHERE product_id = $1
         ORDER BY position ASC",
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    Ok(images)
}

pub async fn create_product(pool: &PgPool, req: &CreateProductRequest) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO products (name, description, price, category_id, color_id, size_id, discount_id)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING *",
    )
    .bind(&req.name)
    .bind(req.description.as_deref().unwrap_or(""))
    .bind(req.price)
    .bind(req.category_id)
    .bind(req.color_id)
    .bind(req.size_id)
    .bind(req.discount_id)
    .fetch_one(pool)
    .await?;

    replace_images(pool, product.id, &req.images).await?;

    Ok(product)
}

pub async fn update_product(
    pool: &PgPool,
    id: Uuid,
    req: &UpdateProductRequest,
) -> Result<Option<Product>> {
    let mut query_builder = sqlx::QueryBuilder::<sqlx::Postgres>::new("UPDATE products SET ");
    let mut has_fields = false;

    if let Some(ref name) = req.name {
        query_builder.push("name = ");
        query_builder.push_bind(name);
        has_fields = true;
    }

    if let Some(ref description) = req.description {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("description = ");
        query_builder.push_bind(description);
        has_fields = true;
    }

    if let Some(price) = req.price {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("price = ");
        query_builder.push_bind(price);
        has_fields = true;
    }

    if let Some(category_id) = req.category_id {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("category_id = ");
        query_builder.push_bind(category_id);
        has_fields = true;
    }

    if let Some(color_id) = req.color_id {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("color_id = ");
        query_builder.push_bind(color_id);
        has_fields = true;
    }

    if let Some(size_id) = req.size_id {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("size_id = ");
        query_builder.push_bind(size_id);
        has_fields = true;
    }

    if let Some(discount_id) = req.discount_id {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("discount_id = ");
        query_builder.push_bind(discount_id);
        has_fields = true;
    }

    if !has_fields {
        if let Some(ref images) = req.images {
            replace_images(pool, id, images).await?;
        }
        return find_by_id(pool, id).await;
    }

    query_builder.push(", updated_at = NOW() WHERE id = ");
    query_builder.push_bind(id);
    query_builder.push(" RETURNING *");

    let product = query_builder
        .build_query_as::<Product>()
        .fetch_optional(pool)
        .await?;

    if product.is_some() {
        if let Some(ref images) = req.images {
            replace_images(pool, id, images).await?;
        }
    }

    Ok(product)
}

pub async fn replace_images(pool: &PgPool, product_id: Uuid, images: &[ImageInput]) -> Result<()> {
    sqlx::query("DELETE FROM product_images WHERE product_id = $1")
        .bind(product_id)
        .execute(pool)
        .await?;

    if !images.is_empty() {
        let mut query_builder =
            sqlx::QueryBuilder::new("INSERT INTO product_images (product_id, url, position) ");

        query_builder.push_values(images.iter().enumerate(), |mut b, (position, image)| {
            b.push_bind(product_id)
                .push_bind(&image.url)
                .push_bind(position as i32);
        });

        query_builder.build().execute(pool).await?;
    }

    Ok(())
}

pub async fn delete_product(pool: &PgPool, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Single-row featured flag write. Per-row atomicity is all the reconciliation
/// relies on; concurrent toggles are last-write-wins.
pub async fn set_featured(
    pool: &PgPool,
    id: Uuid,
    is_featured: bool,
    featured_at: Option<DateTime<Utc>>,
) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "UPDATE products
         SET is_featured = $2, featured_at = $3, updated_at = NOW()
         WHERE id = $1
         RETURNING *",
    )
    .bind(id)
    .bind(is_featured)
    .bind(featured_at)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

pub async fn any_references_category(pool: &PgPool, category_id: Uuid) -> Result<bool> {
    let (exists,): (bool,) =
        sqlx::query_as("SELECT EXISTS (SELECT 1 FROM products WHERE category_id = $1)")
            .bind(category_id)
            .fetch_one(pool)
            .await?;

    Ok(exists)
}

pub async fn any_references_color(pool: &PgPool, color_id: Uuid) -> Result<bool> {
    let (exists,): (bool,) =
        sqlx::query_as("SELECT EXISTS (SELECT 1 FROM products WHERE color_id = $1)")
            .bind(color_id)
            .fetch_one(pool)
            .await?;

    Ok(exists)
}

pub async fn any_references_size(pool: &PgPool, size_id: Uuid) -> Result<bool> {
    let (exists,): (bool,) =
        sqlx::query_as("SELECT EXISTS (SELECT 1 FROM products WHERE size_id = $1)")
            .bind(size_id)
            .fetch_one(pool)
            .await?;

    Ok(exists)
}

pub async fn find_by_discount_id(pool: &PgPool, discount_id: Uuid) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT * FROM products WHERE discount_id = $1 ORDER BY name ASC",
    )
    .bind(discount_id)
    .fetch_all(pool)
    .await?;

    Ok(products)
}
