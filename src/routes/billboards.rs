use axum::{extract::State, Json};

use crate::{error::Result, models::Billboard, queries::billboard_queries, AppState};

pub async fn get_active_billboards(State(state): State<AppState>) -> Result<Json<Vec<Billboard>>> {
    let billboards = billboard_queries::get_all(&state.db, true).await?;

    Ok(Json(billboards))
}
