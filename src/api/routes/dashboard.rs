//! Dashboard Route
//!
//! Summary counts shown on the public home page.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::league::DashboardStats;

/// GET /api/dashboard
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DashboardStats>> {
    let stats = state.store.dashboard_stats().await?;
    Ok(Json(stats))
}
