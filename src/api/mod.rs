//! Championnat BOSTON REST API
//!
//! HTTP API layer for the league backend, built with Axum.
//!
//! # Endpoints
//!
//! ## Public reads
//! - `GET /api/dashboard` - Summary counts
//! - `GET /api/teams` - List teams
//! - `GET /api/matches` - List matches, earliest kick-off first
//! - `GET /api/rankings` - Standings table
//! - `GET /api/news` - Published articles, newest first
//!
//! ## Admin writes
//! - `POST /api/teams`, `DELETE /api/teams/:id`
//! - `POST /api/matches`, `PUT /api/matches/:id`, `DELETE /api/matches/:id`
//! - `POST /api/news`, `DELETE /api/news/:id`
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use boston_league::api::{serve, ApiConfig, AppState};
//! use boston_league::league::LeagueStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(LeagueStore::open("league.db".as_ref())?);
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(store, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    http::HeaderValue,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    let api_routes = Router::new()
        // Dashboard
        .route("/dashboard", get(routes::dashboard::get_dashboard))
        // Teams
        .route("/teams", get(routes::teams::list_teams))
        .route("/teams", post(routes::teams::create_team))
        .route(
            "/teams/:id",
            get(routes::teams::get_team).delete(routes::teams::delete_team),
        )
        // Matches
        .route("/matches", get(routes::matches::list_matches))
        .route("/matches", post(routes::matches::create_match))
        .route(
            "/matches/:id",
            get(routes::matches::get_match).delete(routes::matches::delete_match),
        )
        .route("/matches/:id", put(routes::matches::update_match))
        // Rankings
        .route("/rankings", get(routes::rankings::get_rankings))
        // News
        .route("/news", get(routes::news::list_news))
        .route("/news", post(routes::news::create_news))
        .route(
            "/news/:id",
            get(routes::news::get_news).delete(routes::news::delete_news),
        );

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// CORS policy from config; an empty origin list allows any origin
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Championnat BOSTON API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Championnat BOSTON API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::LeagueStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let store = Arc::new(LeagueStore::open_in_memory().unwrap());
        let state = AppState::new(store, ApiConfig::default());
        build_router(state)
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header("Content-Type", "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create_team(app: &Router, name: &str) -> String {
        let (status, body) = send(
            app,
            "POST",
            "/api/teams",
            Some(json!({"name": name, "city": "Boston"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_str().unwrap().to_string()
    }

    async fn create_match(app: &Router, home: &str, away: &str, date: &str) -> String {
        let (status, body) = send(
            app,
            "POST",
            "/api/matches",
            Some(json!({
                "home_team_id": home,
                "away_team_id": away,
                "match_date": date,
                "venue": "Stade Municipal",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let app = create_test_app();

        let (status, _) = send(&app, "GET", "/health/live", None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(&app, "GET", "/health/ready", None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], "ok");
    }

    #[tokio::test]
    async fn test_create_team_with_roster_details() {
        let app = create_test_app();

        let (status, body) = send(
            &app,
            "POST",
            "/api/teams",
            Some(json!({
                "name": "FC Boston Nord",
                "city": "Boston",
                "founded_year": 1998,
                "players_count": 18,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["players_count"], 18);
        assert_eq!(body["founded_year"], 1998);

        let id = body["id"].as_str().unwrap();
        let (status, body) = send(&app, "GET", &format!("/api/teams/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["players_count"], 18);
    }

    #[tokio::test]
    async fn test_empty_collections() {
        let app = create_test_app();

        for uri in ["/api/teams", "/api/matches", "/api/news", "/api/rankings"] {
            let (status, body) = send(&app, "GET", uri, None).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body, json!([]), "{uri}");
        }

        let (status, body) = send(&app, "GET", "/api/dashboard", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["teams_count"], 0);
        assert_eq!(body["matches_count"], 0);
    }

    #[tokio::test]
    async fn test_team_crud() {
        let app = create_test_app();

        let id = create_team(&app, "FC Nord").await;

        let (status, body) = send(&app, "GET", "/api/teams", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["name"], "FC Nord");
        assert_eq!(body[0]["players_count"], 0);

        let (status, body) = send(&app, "GET", &format!("/api/teams/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["city"], "Boston");

        let (status, body) = send(&app, "DELETE", &format!("/api/teams/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Équipe supprimée avec succès");

        let (status, _) = send(&app, "DELETE", &format!("/api/teams/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_team_requires_name() {
        let app = create_test_app();

        let (status, body) = send(
            &app,
            "POST",
            "/api/teams",
            Some(json!({"name": "  ", "city": "Boston"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_invalid_json_rejected() {
        let app = create_test_app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/teams")
                    .header("Content-Type", "application/json")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_team_with_matches_conflicts() {
        let app = create_test_app();

        let home = create_team(&app, "FC Nord").await;
        let away = create_team(&app, "AS Sud").await;
        let match_id = create_match(&app, &home, &away, "2026-09-06T15:00:00Z").await;

        let (status, body) = send(&app, "DELETE", &format!("/api/teams/{home}"), None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(
            body["error"]["message"],
            "Impossible de supprimer une équipe qui a des matchs associés"
        );

        // Removing the match frees the team.
        let (status, _) = send(&app, "DELETE", &format!("/api/matches/{match_id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(&app, "DELETE", &format!("/api/teams/{home}"), None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_match_validations() {
        let app = create_test_app();
        let home = create_team(&app, "FC Nord").await;
        let away = create_team(&app, "AS Sud").await;

        // Unknown team.
        let (status, _) = send(
            &app,
            "POST",
            "/api/matches",
            Some(json!({
                "home_team_id": home,
                "away_team_id": "ghost",
                "match_date": "2026-09-06T15:00:00Z",
                "venue": "Stade Municipal",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        // A team cannot play itself.
        let (status, body) = send(
            &app,
            "POST",
            "/api/matches",
            Some(json!({
                "home_team_id": home,
                "away_team_id": home,
                "match_date": "2026-09-06T15:00:00Z",
                "venue": "Stade Municipal",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"]["message"],
            "Une équipe ne peut pas jouer contre elle-même"
        );

        // Unparseable kick-off.
        let (status, _) = send(
            &app,
            "POST",
            "/api/matches",
            Some(json!({
                "home_team_id": home,
                "away_team_id": away,
                "match_date": "demain",
                "venue": "Stade Municipal",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_match_list_sorted_and_datetime_local_accepted() {
        let app = create_test_app();
        let home = create_team(&app, "FC Nord").await;
        let away = create_team(&app, "AS Sud").await;

        // Second fixture created first; the datetime-local format (no offset)
        // must be accepted since that is what the admin form submits.
        create_match(&app, &home, &away, "2026-09-20T15:00").await;
        create_match(&app, &away, &home, "2026-09-06T15:00").await;

        let (status, body) = send(&app, "GET", "/api/matches", None).await;
        assert_eq!(status, StatusCode::OK);
        let matches = body.as_array().unwrap();
        assert_eq!(matches.len(), 2);
        assert!(matches[0]["match_date"].as_str().unwrap() < matches[1]["match_date"].as_str().unwrap());
        assert_eq!(matches[0]["status"], "scheduled");
        assert_eq!(matches[0]["home_team_score"], Value::Null);
    }

    #[tokio::test]
    async fn test_record_score_and_rankings() {
        let app = create_test_app();
        let nord = create_team(&app, "FC Nord").await;
        let sud = create_team(&app, "AS Sud").await;
        let match_id = create_match(&app, &nord, &sud, "2026-09-06T15:00:00Z").await;

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/matches/{match_id}"),
            Some(json!({
                "home_team_score": 2,
                "away_team_score": 1,
                "status": "finished",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "finished");
        assert_eq!(body["home_team_score"], 2);

        let (status, body) = send(&app, "GET", "/api/rankings", None).await;
        assert_eq!(status, StatusCode::OK);
        let rankings = body.as_array().unwrap();
        assert_eq!(rankings.len(), 2);
        assert_eq!(rankings[0]["team_name"], "FC Nord");
        assert_eq!(rankings[0]["points"], 3);
        assert_eq!(rankings[0]["position"], 1);
        assert_eq!(rankings[0]["goal_difference"], 1);
        assert_eq!(rankings[1]["points"], 0);

        let (status, body) = send(&app, "GET", "/api/dashboard", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["teams_count"], 2);
        assert_eq!(body["matches_count"], 1);
        assert_eq!(body["finished_matches"], 1);
        assert_eq!(body["upcoming_matches"], 0);
    }

    #[tokio::test]
    async fn test_update_missing_match() {
        let app = create_test_app();

        let (status, _) = send(
            &app,
            "PUT",
            "/api/matches/ghost",
            Some(json!({"status": "cancelled"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_news_flow() {
        let app = create_test_app();

        let (status, body) = send(
            &app,
            "POST",
            "/api/news",
            Some(json!({
                "title": "Ouverture de la saison",
                "content": "Le championnat reprend ce week-end.",
                "author": "La rédaction",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["published"], true);
        let id = body["id"].as_str().unwrap().to_string();

        let (status, body) = send(&app, "GET", "/api/news", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);

        let (status, body) = send(&app, "GET", &format!("/api/news/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Ouverture de la saison");

        let (status, _) = send(&app, "DELETE", &format!("/api/news/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(&app, "GET", &format!("/api/news/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_news_requires_fields() {
        let app = create_test_app();

        let (status, _) = send(
            &app,
            "POST",
            "/api/news",
            Some(json!({"title": "", "content": "x", "author": "y"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
