use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Product;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Discount {
    pub id: Uuid,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub percentage: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct DiscountResponse {
    #[serde(flatten)]
    pub discount: Discount,
    pub products: Vec<Product>,
}

#[derive(Debug, Deserialize)]
pub struct CreateDiscountRequest {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub percentage: Decimal,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateDiscountRequest {
    pub name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub percentage: Option<Decimal>,
    pub is_active: Option<bool>,
}
