//! # Boston League
//!
//! Backend for the Championnat BOSTON, a local football league. Stores
//! teams, matches and news in SQLite and serves them over a REST API
//! consumed by the single-page frontend in `boston-ui/`.
//!
//! ## Modules
//!
//! - [`league`]: Data model, SQLite store and standings computation
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
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

pub mod api;
pub mod config;
pub mod league;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use league::{
    compute_rankings, DashboardStats, LeagueError, LeagueResult, LeagueStore, Match, MatchStatus,
    MatchUpdate, NewMatch, NewNewsArticle, NewTeam, NewsArticle, Ranking, Team,
};

pub use config::{Config, ConfigError, DatabaseConfig, LoggingConfig, ServerConfig};
