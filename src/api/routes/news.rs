//! News Routes
//!
//! Endpoints for league news articles.
//!
//! - GET /api/news - List published articles, newest first
//! - POST /api/news - Publish an article
//! - GET /api/news/:id - Get a specific article
//! - DELETE /api/news/:id - Delete an article

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{CreateNewsRequest, MessageResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::league::{NewNewsArticle, NewsArticle};

/// GET /api/news
pub async fn list_news(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<NewsArticle>>> {
    let articles = state.store.list_published_news().await?;
    Ok(Json(articles))
}

/// GET /api/news/:id
pub async fn get_news(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<NewsArticle>> {
    let article = state
        .store
        .get_news(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Article non trouvé".to_string()))?;
    Ok(Json(article))
}

/// POST /api/news
pub async fn create_news(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateNewsRequest>,
) -> ApiResult<(StatusCode, Json<NewsArticle>)> {
    if req.title.trim().is_empty() || req.content.trim().is_empty() || req.author.trim().is_empty()
    {
        return Err(ApiError::Validation(
            "Titre, contenu et auteur sont obligatoires".to_string(),
        ));
    }

    let article = state
        .store
        .create_news(NewNewsArticle {
            title: req.title,
            content: req.content,
            author: req.author,
            image_url: req.image_url,
            published: req.published,
        })
        .await?;

    tracing::info!(news_id = %article.id, title = %article.title, "Published article");

    Ok((StatusCode::CREATED, Json(article)))
}

/// DELETE /api/news/:id
pub async fn delete_news(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    if !state.store.delete_news(&id).await? {
        return Err(ApiError::NotFound("Article non trouvé".to_string()));
    }

    tracing::info!(news_id = %id, "Deleted article");

    Ok(Json(MessageResponse {
        message: "Article supprimé avec succès".to_string(),
    }))
}
