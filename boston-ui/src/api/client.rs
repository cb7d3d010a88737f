//! HTTP API Client
//!
//! Functions for communicating with the Championnat BOSTON REST API.

use gloo_net::http::Request;

use crate::state::global::{DashboardStats, Match, NewsArticle, Ranking, Team};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8001/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("boston_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("boston_api_url", url);
        }
    }
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorDetail {
    #[allow(dead_code)]
    code: String,
    message: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Extract the server's error message, falling back to a generic one
async fn error_message(response: gloo_net::http::Response) -> String {
    response
        .json::<ErrorBody>()
        .await
        .map(|body| body.error.message)
        .unwrap_or_else(|_| "Erreur inconnue".to_string())
}

async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}{}", api_base, path))
        .send()
        .await
        .map_err(|e| format!("Erreur réseau: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Réponse invalide: {}", e))
}

// ============ Teams ============

/// Fetch all teams
pub async fn fetch_teams() -> Result<Vec<Team>, String> {
    get_json("/teams").await
}

/// Register a new team
pub async fn create_team(
    name: &str,
    city: &str,
    logo_url: Option<String>,
    founded_year: Option<i32>,
    players_count: Option<u32>,
) -> Result<Team, String> {
    #[derive(serde::Serialize)]
    struct CreateTeamRequest {
        name: String,
        city: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        logo_url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        founded_year: Option<i32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        players_count: Option<u32>,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/teams", api_base))
        .json(&CreateTeamRequest {
            name: name.to_string(),
            city: city.to_string(),
            logo_url,
            founded_year,
            players_count,
        })
        .map_err(|e| format!("Requête invalide: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Erreur réseau: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Réponse invalide: {}", e))
}

/// Delete a team. Fails with the server message when matches reference it.
pub async fn delete_team(id: &str) -> Result<String, String> {
    delete(&format!("/teams/{}", id)).await
}

// ============ Matches ============

/// Fetch all matches, earliest kick-off first
pub async fn fetch_matches() -> Result<Vec<Match>, String> {
    get_json("/matches").await
}

/// Schedule a new match. The date is the raw datetime-local input value.
pub async fn create_match(
    home_team_id: &str,
    away_team_id: &str,
    match_date: &str,
    venue: &str,
    referee: Option<String>,
) -> Result<Match, String> {
    #[derive(serde::Serialize)]
    struct CreateMatchRequest {
        home_team_id: String,
        away_team_id: String,
        match_date: String,
        venue: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        referee: Option<String>,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/matches", api_base))
        .json(&CreateMatchRequest {
            home_team_id: home_team_id.to_string(),
            away_team_id: away_team_id.to_string(),
            match_date: match_date.to_string(),
            venue: venue.to_string(),
            referee,
        })
        .map_err(|e| format!("Requête invalide: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Erreur réseau: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Réponse invalide: {}", e))
}

/// Record a score and mark the match finished
pub async fn record_score(
    match_id: &str,
    home_team_score: u32,
    away_team_score: u32,
) -> Result<Match, String> {
    #[derive(serde::Serialize)]
    struct UpdateMatchRequest {
        home_team_score: u32,
        away_team_score: u32,
        status: String,
    }

    let api_base = get_api_base();

    let response = Request::put(&format!("{}/matches/{}", api_base, match_id))
        .json(&UpdateMatchRequest {
            home_team_score,
            away_team_score,
            status: "finished".to_string(),
        })
        .map_err(|e| format!("Requête invalide: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Erreur réseau: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Réponse invalide: {}", e))
}

/// Delete a match
pub async fn delete_match(id: &str) -> Result<String, String> {
    delete(&format!("/matches/{}", id)).await
}

// ============ Rankings ============

/// Fetch the standings, already ordered by the server
pub async fn fetch_rankings() -> Result<Vec<Ranking>, String> {
    get_json("/rankings").await
}

// ============ News ============

/// Fetch published articles, newest first
pub async fn fetch_news() -> Result<Vec<NewsArticle>, String> {
    get_json("/news").await
}

/// Fetch a single article
pub async fn fetch_news_article(id: &str) -> Result<NewsArticle, String> {
    get_json(&format!("/news/{}", id)).await
}

/// Publish a news article
pub async fn create_news(
    title: &str,
    content: &str,
    author: &str,
    image_url: Option<String>,
) -> Result<NewsArticle, String> {
    #[derive(serde::Serialize)]
    struct CreateNewsRequest {
        title: String,
        content: String,
        author: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        image_url: Option<String>,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/news", api_base))
        .json(&CreateNewsRequest {
            title: title.to_string(),
            content: content.to_string(),
            author: author.to_string(),
            image_url,
        })
        .map_err(|e| format!("Requête invalide: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Erreur réseau: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Réponse invalide: {}", e))
}

/// Delete an article
pub async fn delete_news(id: &str) -> Result<String, String> {
    delete(&format!("/news/{}", id)).await
}

// ============ Dashboard ============

/// Fetch the summary counts for the home page
pub async fn fetch_dashboard() -> Result<DashboardStats, String> {
    get_json("/dashboard").await
}

// ============ Shared ============

async fn delete(path: &str) -> Result<String, String> {
    let api_base = get_api_base();

    let response = Request::delete(&format!("{}{}", api_base, path))
        .send()
        .await
        .map_err(|e| format!("Erreur réseau: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let result: MessageResponse = response
        .json()
        .await
        .map_err(|e| format!("Réponse invalide: {}", e))?;

    Ok(result.message)
}
