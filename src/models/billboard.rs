use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Billboard {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub offer: String,
    pub image_url: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateBillboardRequest {
    pub name: String,
    pub description: Option<String>,
    pub offer: Option<String>,
    pub image_url: String,
    pub active: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBillboardRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub offer: Option<String>,
    pub image_url: Option<String>,
    pub active: Option<bool>,
}
