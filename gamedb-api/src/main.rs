//! gamedb-api - Game catalog HTTP service
//!
//! CRUD API over the game catalog plus feed-driven bulk populate.
//! Serves the static asset directory at the site root.

use anyhow::Result;
use clap::Parser;
use gamedb_api::{build_router, AppState};
use gamedb_common::config::ServiceConfig;
use gamedb_common::db::init_database;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "gamedb-api", about = "Game catalog HTTP service")]
struct Args {
    /// Path to TOML config file (default: ./gamedb.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bind port (overrides config file and environment)
    #[arg(long)]
    port: Option<u16>,

    /// SQLite database path (overrides config file and environment)
    #[arg(long)]
    database: Option<PathBuf>,

    /// Static asset directory served at the site root
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Build identification first, before any database delays
    info!(
        "Starting gamedb API v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    // CLI flags are the highest-priority tier, applied on top of
    // env/file/default resolution
    let mut config = ServiceConfig::resolve(args.config.as_deref())?;
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(database) = args.database {
        config.database = database;
    }
    if let Some(static_dir) = args.static_dir {
        config.static_dir = static_dir;
    }

    info!("Database path: {}", config.database.display());
    let pool = init_database(&config.database).await?;

    let state = AppState::new(pool, config.clone());
    let app = build_router(state);

    let bind_addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("gamedb-api listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
