//! Populate handler for `/api/games/populate`
//!
//! Fetches both top-app feeds concurrently, normalizes and merges them
//! into a combined top-100, and bulk-inserts the result. Either fetch
//! failing fails the whole request; there is no partial populate from a
//! single platform.

use axum::{extract::State, Json};
use gamedb_common::db::Game;
use tracing::info;

use crate::api::ApiError;
use crate::feeds::{merge_top, normalize_feed, FeedClient, TOP_N};
use crate::{store, AppState};

/// POST /api/games/populate
pub async fn populate_games(State(state): State<AppState>) -> Result<Json<Vec<Game>>, ApiError> {
    let client = FeedClient::new().map_err(|e| ApiError::new("populate games", e))?;

    // The two fetches are independent; try_join! runs them concurrently
    // and fails fast if either feed is unreachable
    let (ios_feed, android_feed) = tokio::try_join!(
        client.fetch_feed(&state.config.ios_feed_url),
        client.fetch_feed(&state.config.android_feed_url),
    )
    .map_err(|e| ApiError::new("populate games", e))?;

    let ios_apps = normalize_feed(ios_feed);
    let android_apps = normalize_feed(android_feed);
    let payloads = merge_top(ios_apps, android_apps, TOP_N);

    let created = store::bulk_create(&state.db, &payloads)
        .await
        .map_err(|e| ApiError::new("populate games", e))?;

    info!(count = created.len(), "Populated catalog from feeds");
    Ok(Json(created))
}
