//! League Domain
//!
//! Entities and persistence for the Championnat BOSTON league:
//! teams, matches, news articles, and the derived standings table.
//!
//! - [`model`]: entity types shared by the store and the API layer
//! - [`store`]: SQLite-backed persistence
//! - [`standings`]: ranking computation over finished matches

pub mod error;
pub mod model;
pub mod standings;
pub mod store;

pub use error::{LeagueError, LeagueResult};
pub use model::{
    DashboardStats, Match, MatchStatus, MatchUpdate, NewMatch, NewNewsArticle, NewTeam,
    NewsArticle, Ranking, Team,
};
pub use standings::compute_rankings;
pub use store::LeagueStore;
