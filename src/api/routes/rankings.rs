//! Rankings Route
//!
//! The standings table, recomputed from finished matches on every request.
//! The frontend displays the returned order as-is and never recomputes it.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::league::Ranking;

/// GET /api/rankings
pub async fn get_rankings(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Ranking>>> {
    let rankings = state.store.rankings().await?;
    Ok(Json(rankings))
}
