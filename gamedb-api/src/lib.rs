//! gamedb-api library - game catalog HTTP service
//!
//! CRUD over the `games` table plus a bulk populate operation that pulls
//! the iOS and Android top-app feeds, merges them into a combined
//! top-100, and inserts the result.

use axum::Router;
use gamedb_common::config::ServiceConfig;
use sqlx::SqlitePool;
use tower_http::{services::ServeDir, trace::TraceLayer};

pub mod api;
pub mod feeds;
pub mod store;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Resolved service configuration (feed URLs, static asset dir)
    pub config: ServiceConfig,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool, config: ServiceConfig) -> Self {
        Self { db, config }
    }
}

/// Build application router
///
/// API routes under `/api/games`, a health endpoint, and the static
/// asset directory served at the site root.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post, put};

    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/api/games", get(api::list_games).post(api::create_game))
        .route("/api/games/:id", put(api::update_game).delete(api::delete_game))
        .route("/api/games/search", post(api::search_games))
        .route("/api/games/populate", post(api::populate_games))
        .merge(api::health_routes())
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
