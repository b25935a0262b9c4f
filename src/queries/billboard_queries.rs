use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::Result,
    models::{Billboard, CreateBillboardRequest, UpdateBillboardRequest},
};

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Billboard>> {
    let billboard = sqlx::query_as::<_, Billboard>("SELECT * FROM billboards WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(billboard)
}

pub async fn get_all(pool: &PgPool, active_only: bool) -> Result<Vec<Billboard>> {
    let query = if active_only {
        "SELECT * FROM billboards WHERE active = TRUE ORDER BY created_at DESC"
    } else {
        "SELECT * FROM billboards ORDER BY created_at DESC"
    };

    let billboards = sqlx::query_as::<_, Billboard>(query).fetch_all(pool).await?;

    Ok(billboards)
}

pub async fn create_billboard(pool: &PgPool, req: &CreateBillboardRequest) -> Result<Billboard> {
    let billboard = sqlx::query_as::<_, Billboard>(
        "INSERT INTO billboards (name, description, offer, image_url, active)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING *",
    )
    .bind(&req.name)
    .bind(req.description.as_deref().unwrap_or(""))
    .bind(req.offer.as_deref().unwrap_or(""))
    .bind(&req.image_url)
    .bind(req.active.unwrap_or(true))
    .fetch_one(pool)
    .await?;

    Ok(billboard)
}

pub async fn update_billboard(
    pool: &PgPool,
    id: Uuid,
    req: &UpdateBillboardRequest,
) -> Result<Option<Billboard>> {
    let mut query_builder = sqlx::QueryBuilder::<sqlx::Postgres>::new("UPDATE billboards SET ");
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

    if let Some(ref offer) = req.offer {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("offer = ");
        query_builder.push_bind(offer);
        has_fields = true;
    }

    if let Some(ref image_url) = req.image_url {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("image_url = ");
        query_builder.push_bind(image_url);
        has_fields = true;
    }

    if let Some(active) = req.active {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("active = ");
        query_builder.push_bind(active);
        has_fields = true;
    }

    if !has_fields {
        return find_by_id(pool, id).await;
    }

    query_builder.push(", updated_at = NOW() WHERE id = ");
    query_builder.push_bind(id);
    query_builder.push(" RETURNING *");

    let billboard = query_builder
        .build_query_as::<Billboard>()
        .fetch_optional(pool)
        .await?;

    Ok(billboard)
}

pub async fn delete_billboard(pool: &PgPool, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM billboards WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
