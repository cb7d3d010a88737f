//! League Error Types
//!
//! Errors surfaced by the persistence layer. HTTP mapping lives in the
//! API layer; the store only reports what went wrong with the data.

use thiserror::Error;

/// Errors from the league store
#[derive(Error, Debug)]
pub enum LeagueError {
    /// Underlying SQLite failure
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Filesystem failure while opening or creating the database
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored timestamp could not be parsed back
    #[error("corrupt timestamp: {0}")]
    CorruptTimestamp(String),

    /// A stored status value is not one of the known lifecycle states
    #[error("unknown match status: {0}")]
    UnknownStatus(String),
}

/// Result type for store operations
pub type LeagueResult<T> = Result<T, LeagueError>;
