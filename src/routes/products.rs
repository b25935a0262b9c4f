use axum::{
    extract::{Path, Query, State},
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    catalog::{
        amount_saved, apply_filters, discounted_price, featured_view, format_inr, CatalogProduct,
        FilterParams, SortKey,
    },
    error::{AppError, Result},
    models::ProductResponse,
    queries::{attribute_queries, category_queries, discount_queries, product_queries},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct ProductFilterQuery {
    pub category_id: Option<Uuid>,
    pub price_min: Option<Decimal>,
    pub price_max: Option<Decimal>,
    pub sort_by: Option<SortKey>,
}

/// All-products listing. Absent parameters fall back to the reset state:
/// no category, name ascending, price window spanning the whole catalog.
pub async fn get_products(
    State(state): State<AppState>,
    Query(query): Query<ProductFilterQuery>,
) -> Result<Json<Vec<CatalogProduct>>> {
    let snapshot = state.catalog.snapshot(&state.db).await?;

    let mut params = FilterParams::reset(&snapshot);
    params.category_id = query.category_id;
    if let Some(price_min) = query.price_min {
        params.price_min = price_min;
    }
    if let Some(price_max) = query.price_max {
        params.price_max = price_max;
    }
    if let Some(sort) = query.sort_by {
        params.sort = sort;
    }

    Ok(Json(apply_filters(&snapshot, &params)))
}

pub async fn get_featured_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<CatalogProduct>>> {
    let snapshot = state.catalog.snapshot(&state.db).await?;

    Ok(Json(featured_view(&snapshot)))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProductResponse>> {
    let product = product_queries::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    let response = build_product_response(&state, product).await?;

    Ok(Json(response))
}

/// Joins the denormalized references onto a product row.
pub(crate) async fn build_product_response(
    state: &AppState,
    product: crate::models::Product,
) -> Result<ProductResponse> {
    let images = product_queries::find_images_by_product_id(&state.db, product.id).await?;
    let category = category_queries::find_by_id(&state.db, product.category_id).await?;

    let color = match product.color_id {
        Some(color_id) => attribute_queries::find_color_by_id(&state.db, color_id).await?,
        None => None,
    };

    let size = match product.size_id {
        Some(size_id) => attribute_queries::find_size_by_id(&state.db, size_id).await?,
        None => None,
    };

    let discount = match product.discount_id {
        Some(discount_id) => discount_queries::find_by_id(&state.db, discount_id).await?,
        None => None,
    };

    let price = product.price.to_string();
    let (final_price, saved) = match discount {
        Some(ref d) if d.is_active => (
            discounted_price(&price, d.percentage),
            amount_saved(&price, d.percentage),
        ),
        _ => (product.price, Decimal::ZERO),
    };

    Ok(ProductResponse {
        product,
        images,
        category,
        color,
        size,
        discount,
        final_price,
        amount_saved: saved,
        display_price: format_inr(final_price),
    })
}
