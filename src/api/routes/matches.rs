//! Match Routes
//!
//! CRUD endpoints for matches, plus the partial update used to record
//! scores and move a match through its lifecycle.
//!
//! - GET /api/matches - List all matches, earliest kick-off first
//! - POST /api/matches - Schedule a new match
//! - GET /api/matches/:id - Get a specific match
//! - PUT /api/matches/:id - Update scores/status/attendance/notes
//! - DELETE /api/matches/:id - Delete a match

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{parse_timestamp, CreateMatchRequest, MessageResponse, UpdateMatchRequest};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::league::{Match, MatchUpdate, NewMatch};

/// GET /api/matches
pub async fn list_matches(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Match>>> {
    let matches = state.store.list_matches().await?;
    Ok(Json(matches))
}

/// GET /api/matches/:id
pub async fn get_match(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Match>> {
    let m = state
        .store
        .get_match(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Match non trouvé".to_string()))?;
    Ok(Json(m))
}

/// POST /api/matches
///
/// Both teams must exist and a team cannot play against itself.
pub async fn create_match(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateMatchRequest>,
) -> ApiResult<(StatusCode, Json<Match>)> {
    let match_date = parse_timestamp(&req.match_date).ok_or_else(|| {
        ApiError::Validation(format!("Date de match invalide: {}", req.match_date))
    })?;

    if req.venue.trim().is_empty() {
        return Err(ApiError::Validation("Le lieu est obligatoire".to_string()));
    }

    let home = state.store.get_team(&req.home_team_id).await?;
    let away = state.store.get_team(&req.away_team_id).await?;
    if home.is_none() || away.is_none() {
        return Err(ApiError::NotFound(
            "Une ou plusieurs équipes non trouvées".to_string(),
        ));
    }

    if req.home_team_id == req.away_team_id {
        return Err(ApiError::Validation(
            "Une équipe ne peut pas jouer contre elle-même".to_string(),
        ));
    }

    let m = state
        .store
        .create_match(NewMatch {
            home_team_id: req.home_team_id,
            away_team_id: req.away_team_id,
            match_date,
            venue: req.venue,
            referee: req.referee,
        })
        .await?;

    tracing::info!(match_id = %m.id, kick_off = %m.match_date, "Scheduled match");

    Ok((StatusCode::CREATED, Json(m)))
}

/// PUT /api/matches/:id
pub async fn update_match(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateMatchRequest>,
) -> ApiResult<Json<Match>> {
    let update = MatchUpdate {
        home_team_score: req.home_team_score,
        away_team_score: req.away_team_score,
        status: req.status,
        attendance: req.attendance,
        notes: req.notes,
    };

    let m = state
        .store
        .update_match(&id, update)
        .await?
        .ok_or_else(|| ApiError::NotFound("Match non trouvé".to_string()))?;

    tracing::info!(match_id = %id, status = %m.status, "Updated match");

    Ok(Json(m))
}

/// DELETE /api/matches/:id
pub async fn delete_match(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    if !state.store.delete_match(&id).await? {
        return Err(ApiError::NotFound("Match non trouvé".to_string()));
    }

    tracing::info!(match_id = %id, "Deleted match");

    Ok(Json(MessageResponse {
        message: "Match supprimé avec succès".to_string(),
    }))
}
