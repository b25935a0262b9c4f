use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::{database, error::Result, AppState};

pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "medicart-back"
        })),
    )
}

/// Readiness covers the two things requests depend on: a reachable database
/// and the catalog cache. The generation counter is reported so operators can
/// see invalidations flowing after mutations.
pub async fn readiness_check(State(state): State<AppState>) -> Result<impl IntoResponse> {
    database::check_health(&state.db).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "database": "connected",
            "catalog_generation": state.catalog.generation()
        })),
    ))
}
