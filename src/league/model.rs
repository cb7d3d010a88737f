//! League Entities
//!
//! The entity types mirrored by the frontend: teams, matches, news articles,
//! the derived ranking rows and the dashboard summary counts. All of them
//! serialize to the JSON shapes the UI consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A club registered in the championship
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub founded_year: Option<i32>,
    #[serde(default)]
    pub players_count: u32,
    pub created_at: DateTime<Utc>,
}

/// Fields required to register a new team
#[derive(Debug, Clone)]
pub struct NewTeam {
    pub name: String,
    pub city: String,
    pub logo_url: Option<String>,
    pub founded_year: Option<i32>,
    pub players_count: u32,
}

/// Lifecycle state of a match, controlling which UI actions apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Live,
    Finished,
    Cancelled,
}

impl MatchStatus {
    /// Storage representation, matching the wire format
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::Live => "live",
            MatchStatus::Finished => "finished",
            MatchStatus::Cancelled => "cancelled",
        }
    }

    /// Parse the storage representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "scheduled" => Some(MatchStatus::Scheduled),
            "live" => Some(MatchStatus::Live),
            "finished" => Some(MatchStatus::Finished),
            "cancelled" => Some(MatchStatus::Cancelled),
            _ => None,
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixture between two teams
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Match {
    pub id: String,
    pub home_team_id: String,
    pub away_team_id: String,
    #[serde(default)]
    pub home_team_score: Option<u32>,
    #[serde(default)]
    pub away_team_score: Option<u32>,
    pub match_date: DateTime<Utc>,
    pub venue: String,
    pub status: MatchStatus,
    #[serde(default)]
    pub referee: Option<String>,
    #[serde(default)]
    pub attendance: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields required to schedule a new match
#[derive(Debug, Clone)]
pub struct NewMatch {
    pub home_team_id: String,
    pub away_team_id: String,
    pub match_date: DateTime<Utc>,
    pub venue: String,
    pub referee: Option<String>,
}

/// Partial update applied to an existing match. `None` fields are untouched.
#[derive(Debug, Clone, Default)]
pub struct MatchUpdate {
    pub home_team_score: Option<u32>,
    pub away_team_score: Option<u32>,
    pub status: Option<MatchStatus>,
    pub attendance: Option<u32>,
    pub notes: Option<String>,
}

impl MatchUpdate {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.home_team_score.is_none()
            && self.away_team_score.is_none()
            && self.status.is_none()
            && self.attendance.is_none()
            && self.notes.is_none()
    }
}

/// A published news article
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields required to publish an article
#[derive(Debug, Clone)]
pub struct NewNewsArticle {
    pub title: String,
    pub content: String,
    pub author: String,
    pub image_url: Option<String>,
    pub published: bool,
}

/// One row of the standings table, derived from finished matches
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ranking {
    pub team_id: String,
    pub team_name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
    pub position: u32,
}

/// Summary counts for the home dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub teams_count: u64,
    pub matches_count: u64,
    pub finished_matches: u64,
    pub upcoming_matches: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            MatchStatus::Scheduled,
            MatchStatus::Live,
            MatchStatus::Finished,
            MatchStatus::Cancelled,
        ] {
            assert_eq!(MatchStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(MatchStatus::parse("postponed"), None);
    }

    #[test]
    fn test_status_serde_lowercase() {
        let json = serde_json::to_string(&MatchStatus::Finished).unwrap();
        assert_eq!(json, "\"finished\"");
        let back: MatchStatus = serde_json::from_str("\"live\"").unwrap();
        assert_eq!(back, MatchStatus::Live);
    }

    #[test]
    fn test_match_update_is_empty() {
        assert!(MatchUpdate::default().is_empty());
        let update = MatchUpdate {
            status: Some(MatchStatus::Cancelled),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
