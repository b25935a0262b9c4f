use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    catalog::{search, SearchOutcome},
    error::Result,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

pub async fn search_catalog(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchOutcome>> {
    let snapshot = state.catalog.snapshot(&state.db).await?;
    let outcome = search(&snapshot, query.q.as_deref().unwrap_or(""));

    Ok(Json(outcome))
}
