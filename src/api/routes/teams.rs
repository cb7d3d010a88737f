//! Team Routes
//!
//! CRUD endpoints for teams.
//!
//! - GET /api/teams - List all teams
//! - POST /api/teams - Create a new team
//! - GET /api/teams/:id - Get a specific team
//! - DELETE /api/teams/:id - Delete a team (rejected while matches reference it)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{CreateTeamRequest, MessageResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::league::{NewTeam, Team};

/// GET /api/teams
pub async fn list_teams(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Team>>> {
    let teams = state.store.list_teams().await?;
    Ok(Json(teams))
}

/// GET /api/teams/:id
pub async fn get_team(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Team>> {
    let team = state
        .store
        .get_team(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Équipe non trouvée".to_string()))?;
    Ok(Json(team))
}

/// POST /api/teams
pub async fn create_team(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateTeamRequest>,
) -> ApiResult<(StatusCode, Json<Team>)> {
    validate_create_request(&req)?;

    let team = state
        .store
        .create_team(NewTeam {
            name: req.name,
            city: req.city,
            logo_url: req.logo_url,
            founded_year: req.founded_year,
            players_count: req.players_count.unwrap_or(0),
        })
        .await?;

    tracing::info!(team_id = %team.id, team_name = %team.name, "Created team");

    Ok((StatusCode::CREATED, Json(team)))
}

/// DELETE /api/teams/:id
///
/// A team that still appears in matches cannot be removed; the caller gets
/// a 409 with the message the admin UI special-cases.
pub async fn delete_team(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    if state.store.get_team(&id).await?.is_none() {
        return Err(ApiError::NotFound("Équipe non trouvée".to_string()));
    }

    let match_count = state.store.team_match_count(&id).await?;
    if match_count > 0 {
        return Err(ApiError::Conflict(
            "Impossible de supprimer une équipe qui a des matchs associés".to_string(),
        ));
    }

    state.store.delete_team(&id).await?;
    tracing::info!(team_id = %id, "Deleted team");

    Ok(Json(MessageResponse {
        message: "Équipe supprimée avec succès".to_string(),
    }))
}

/// Validate create team request
fn validate_create_request(req: &CreateTeamRequest) -> ApiResult<()> {
    if req.name.trim().is_empty() {
        return Err(ApiError::Validation(
            "Le nom de l'équipe est obligatoire".to_string(),
        ));
    }
    if req.city.trim().is_empty() {
        return Err(ApiError::Validation("La ville est obligatoire".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_create_request() {
        let valid = CreateTeamRequest {
            name: "FC Nord".to_string(),
            city: "Boston".to_string(),
            logo_url: None,
            founded_year: None,
            players_count: None,
        };
        assert!(validate_create_request(&valid).is_ok());

        let blank_name = CreateTeamRequest {
            name: "   ".to_string(),
            ..valid.clone()
        };
        assert!(validate_create_request(&blank_name).is_err());

        let blank_city = CreateTeamRequest {
            city: String::new(),
            ..valid
        };
        assert!(validate_create_request(&blank_city).is_err());
    }
}
