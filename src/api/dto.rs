//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::league::MatchStatus;

// ============================================
// TEAM DTOs
// ============================================

/// Create team request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamRequest {
    /// Team name
    pub name: String,
    /// Home city
    pub city: String,
    /// Optional crest/logo URL
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Optional founding year
    #[serde(default)]
    pub founded_year: Option<i32>,
    /// Squad size, defaults to 0
    #[serde(default)]
    pub players_count: Option<u32>,
}

// ============================================
// MATCH DTOs
// ============================================

/// Create match request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMatchRequest {
    /// Home team id
    pub home_team_id: String,
    /// Away team id
    pub away_team_id: String,
    /// Kick-off, ISO 8601; naive values are taken as UTC
    pub match_date: String,
    /// Venue name
    pub venue: String,
    /// Optional referee name
    #[serde(default)]
    pub referee: Option<String>,
}

/// Partial match update (scores, lifecycle status, extras)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMatchRequest {
    #[serde(default)]
    pub home_team_score: Option<u32>,
    #[serde(default)]
    pub away_team_score: Option<u32>,
    #[serde(default)]
    pub status: Option<MatchStatus>,
    #[serde(default)]
    pub attendance: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
}

// ============================================
// NEWS DTOs
// ============================================

/// Create news article request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNewsRequest {
    /// Headline
    pub title: String,
    /// Body text
    pub content: String,
    /// Byline
    pub author: String,
    /// Optional illustration URL
    #[serde(default)]
    pub image_url: Option<String>,
    /// Defaults to true; unpublished articles are hidden from the list
    #[serde(default = "default_published")]
    pub published: bool,
}

fn default_published() -> bool {
    true
}

// ============================================
// SHARED DTOs
// ============================================

/// Confirmation body returned by delete endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Parse a client-supplied timestamp.
///
/// Browsers send `datetime-local` values without an offset; those are taken
/// as UTC. Full RFC 3339 values are accepted as-is.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_timestamp_rfc3339() {
        let dt = parse_timestamp("2026-09-06T15:00:00Z").unwrap();
        assert_eq!(dt.hour(), 15);

        // Offsets are normalized to UTC.
        let dt = parse_timestamp("2026-09-06T15:00:00+02:00").unwrap();
        assert_eq!(dt.hour(), 13);
    }

    #[test]
    fn test_parse_timestamp_datetime_local() {
        let dt = parse_timestamp("2026-09-06T15:00").unwrap();
        assert_eq!(dt.hour(), 15);
        assert_eq!(dt.minute(), 0);
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("demain").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_create_news_defaults_published() {
        let req: CreateNewsRequest = serde_json::from_str(
            r#"{"title": "T", "content": "C", "author": "A"}"#,
        )
        .unwrap();
        assert!(req.published);
        assert!(req.image_url.is_none());
    }
}
