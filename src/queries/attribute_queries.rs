use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::Result,
    models::{Color, CreateAttributeRequest, Size},
};

pub async fn get_all_colors(pool: &PgPool) -> Result<Vec<Color>> {
    let colors = sqlx::query_as::<_, Color>("SELECT * FROM colors ORDER BY name ASC")
        .fetch_all(pool)
        .await?;

    Ok(colors)
}

pub async fn create_color(pool: &PgPool, req: &CreateAttributeRequest) -> Result<Color> {
    let color =
        sqlx::query_as::<_, Color>("INSERT INTO colors (name, value) VALUES ($1, $2) RETURNING *")
            .bind(&req.name)
            .bind(&req.value)
            .fetch_one(pool)
            .await?;

    Ok(color)
}

pub async fn delete_color(pool: &PgPool, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM colors WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn get_all_sizes(pool: &PgPool) -> Result<Vec<Size>> {
    let sizes = sqlx::query_as::<_, Size>("SELECT * FROM sizes ORDER BY name ASC")
        .fetch_all(pool)
        .await?;

    Ok(sizes)
}

pub async fn create_size(pool: &PgPool, req: &CreateAttributeRequest) -> Result<Size> {
    let size =
        sqlx::query_as::<_, Size>("INSERT INTO sizes (name, value) VALUES ($1, $2) RETURNING *")
            .bind(&req.name)
            .bind(&req.value)
            .fetch_one(pool)
            .await?;

    Ok(size)
}

pub async fn delete_size(pool: &PgPool, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM sizes WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn find_color_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Color>> {
    let color = sqlx::query_as::<_, Color>("SELECT * FROM colors WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(color)
}

pub async fn find_size_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Size>> {
    let size = sqlx::query_as::<_, Size>("SELECT * FROM sizes WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(size)
}
