use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::Result,
    models::{CreateDiscountRequest, Discount, UpdateDiscountRequest},
};

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Discount>> {
    let discount = sqlx::query_as::<_, Discount>("SELECT * FROM discounts WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(discount)
}

pub async fn get_all(pool: &PgPool) -> Result<Vec<Discount>> {
    let discounts =
        sqlx::query_as::<_, Discount>("SELECT * FROM discounts ORDER BY created_at DESC")
            .fetch_all(pool)
            .await?;

    Ok(discounts)
}

pub async fn create_discount(pool: &PgPool, req: &CreateDiscountRequest) -> Result<Discount> {
    let discount = sqlx::query_as::<_, Discount>(
        "INSERT INTO discounts (name, percentage, is_active)
         VALUES ($1, $2, $3)
         RETURNING *",
    )
    .bind(&req.name)
    .bind(req.percentage)
    .bind(req.is_active.unwrap_or(true))
    .fetch_one(pool)
    .await?;

    Ok(discount)
}

pub async fn update_discount(
    pool: &PgPool,
    id: Uuid,
    req: &UpdateDiscountRequest,
) -> Result<Option<Discount>> {
    let mut query_builder = sqlx::QueryBuilder::<sqlx::Postgres>::new("UPDATE discounts SET ");
    let mut has_fields = false;

    if let Some(ref name) = req.name {
        query_builder.push("name = ");
        query_builder.push_bind(name);
        has_fields = true;
    }

    if let Some(percentage) = req.percentage {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("percentage = ");
        query_builder.push_bind(percentage);
        has_fields = true;
    }

    if let Some(is_active) = req.is_active {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("is_active = ");
        query_builder.push_bind(is_active);
        has_fields = true;
    }

    if !has_fields {
        return find_by_id(pool, id).await;
    }

    query_builder.push(", updated_at = NOW() WHERE id = ");
    query_builder.push_bind(id);
    query_builder.push(" RETURNING *");

    let discount = query_builder
        .build_query_as::<Discount>()
        .fetch_optional(pool)
        .await?;

    Ok(discount)
}

pub async fn delete_discount(pool: &PgPool, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM discounts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
