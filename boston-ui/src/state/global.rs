//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Teams registered in the championship
    pub teams: RwSignal<Vec<Team>>,
    /// All matches, earliest kick-off first
    pub matches: RwSignal<Vec<Match>>,
    /// Standings as returned by the API, already ordered
    pub rankings: RwSignal<Vec<Ranking>>,
    /// Published news articles, newest first
    pub news: RwSignal<Vec<NewsArticle>>,
    /// Summary counts for the home page
    pub dashboard: RwSignal<Option<DashboardStats>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// A team as returned by the API
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
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
    pub created_at: String,
}

/// A match as returned by the API
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct Match {
    pub id: String,
    pub home_team_id: String,
    pub away_team_id: String,
    #[serde(default)]
    pub home_team_score: Option<u32>,
    #[serde(default)]
    pub away_team_score: Option<u32>,
    pub match_date: String,
    pub venue: String,
    pub status: String,
    #[serde(default)]
    pub referee: Option<String>,
    #[serde(default)]
    pub attendance: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: String,
}

impl Match {
    /// "2 - 1" when both scores are in, "-" otherwise
    pub fn score_display(&self) -> String {
        match (self.home_team_score, self.away_team_score) {
            (Some(h), Some(a)) => format!("{} - {}", h, a),
            _ => "-".to_string(),
        }
    }
}

/// A news article as returned by the API
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub published: bool,
    pub created_at: String,
}

/// One row of the standings table
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
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

/// Summary counts for the home page
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct DashboardStats {
    pub teams_count: u64,
    pub matches_count: u64,
    pub finished_matches: u64,
    pub upcoming_matches: u64,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        teams: create_rw_signal(Vec::new()),
        matches: create_rw_signal(Vec::new()),
        rankings: create_rw_signal(Vec::new()),
        news: create_rw_signal(Vec::new()),
        dashboard: create_rw_signal(None),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Resolve a team name from its id, for match rows
    pub fn team_name(&self, team_id: &str) -> String {
        self.teams
            .get()
            .iter()
            .find(|t| t.id == team_id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| "Équipe inconnue".to_string())
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

/// Format an ISO timestamp as "06/09/2026 15:00"
pub fn format_date_time(iso: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(iso)
        .map(|dt| dt.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

/// Format an ISO timestamp as "06/09/2026"
pub fn format_date(iso: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(iso)
        .map(|dt| dt.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

/// Format an ISO timestamp as "15:00"
pub fn format_time(iso: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(iso)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

/// French label for a match status
pub fn status_label(status: &str) -> &'static str {
    match status {
        "scheduled" => "Programmé",
        "live" => "En direct",
        "finished" => "Terminé",
        "cancelled" => "Annulé",
        _ => "Inconnu",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_time() {
        assert_eq!(
            format_date_time("2026-09-06T15:00:00+00:00"),
            "06/09/2026 15:00"
        );
    }

    #[test]
    fn test_format_date_passes_through_garbage() {
        assert_eq!(format_date("pas une date"), "pas une date");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time("2026-09-06T15:00:00+00:00"), "15:00");
        assert_eq!(format_time("pas une date"), "pas une date");
    }

    #[test]
    fn test_status_label() {
        assert_eq!(status_label("finished"), "Terminé");
        assert_eq!(status_label("postponed"), "Inconnu");
    }

    #[test]
    fn test_score_display() {
        let mut m = sample_match();
        assert_eq!(m.score_display(), "-");
        m.home_team_score = Some(2);
        m.away_team_score = Some(1);
        assert_eq!(m.score_display(), "2 - 1");
    }

    fn sample_match() -> Match {
        Match {
            id: "m1".to_string(),
            home_team_id: "t1".to_string(),
            away_team_id: "t2".to_string(),
            home_team_score: None,
            away_team_score: None,
            match_date: "2026-09-06T15:00:00+00:00".to_string(),
            venue: "Stade Municipal".to_string(),
            status: "scheduled".to_string(),
            referee: None,
            attendance: None,
            notes: None,
            created_at: "2026-08-30T10:00:00+00:00".to_string(),
        }
    }
}
