use axum::{extract::State, Json};

use crate::{error::Result, services::upstream_service::UpstreamResource, AppState};

pub async fn get_products(State(state): State<AppState>) -> Result<Json<serde_json::Value>> {
    let body = state.upstream.fetch(UpstreamResource::Products).await?;
    Ok(Json(body))
}

pub async fn get_categories(State(state): State<AppState>) -> Result<Json<serde_json::Value>> {
    let body = state.upstream.fetch(UpstreamResource::Categories).await?;
    Ok(Json(body))
}

pub async fn get_discounts(State(state): State<AppState>) -> Result<Json<serde_json::Value>> {
    let body = state.upstream.fetch(UpstreamResource::Discounts).await?;
    Ok(Json(body))
}

pub async fn get_billboards(State(state): State<AppState>) -> Result<Json<serde_json::Value>> {
    let body = state.upstream.fetch(UpstreamResource::Billboards).await?;
    Ok(Json(body))
}
