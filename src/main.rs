//! Championnat BOSTON API Server
//!
//! Run with: cargo run --bin boston-league-api
//!
//! # Configuration
//!
//! Read from `config.toml` (see [`boston_league::config`] for the search
//! paths), with environment overrides:
//! - `BOSTON_DB_PATH`: SQLite database file
//! - `BOSTON_HOST`: Host to bind to (default: 0.0.0.0)
//! - `BOSTON_PORT`: Port to listen on (default: 8001)
//! - `BOSTON_CORS_ORIGINS`: Comma-separated allowed origins
//! - `BOSTON_LOG_LEVEL` / `BOSTON_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Overrides the log filter entirely when set

use boston_league::api::{serve, ApiConfig, AppState};
use boston_league::config::Config;
use boston_league::league::LeagueStore;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();

    init_tracing(&config);

    tracing::info!(
        "Starting Championnat BOSTON API server v{}",
        env!("CARGO_PKG_VERSION")
    );
    tracing::info!("Database: {}", config.database.path);

    let store = Arc::new(LeagueStore::open(Path::new(&config.database.path))?);

    let api_config = ApiConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        cors_origins: config.server.cors_origins.clone(),
    };

    let state = AppState::new(store, api_config.clone());

    tracing::info!("Starting server on {}", api_config.addr());
    serve(state, &api_config).await?;

    tracing::info!("Championnat BOSTON API server stopped");
    Ok(())
}

/// Initialize tracing from the logging config
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "boston_league={},tower_http=debug",
            config.logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
