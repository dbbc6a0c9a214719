//! Search handler for `/api/games/search`

use axum::{extract::State, Json};
use gamedb_common::db::Game;
use serde::Deserialize;

use crate::api::ApiError;
use crate::{store, AppState};

/// Search request body; both fields optional. An empty string counts as
/// absent, matching the original API contract.
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    pub name: Option<String>,
    pub platform: Option<String>,
}

/// POST /api/games/search
///
/// Case-insensitive substring match; when both predicates are supplied
/// a result must satisfy both (logical AND). No predicates behaves like
/// a full listing.
pub async fn search_games(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<Vec<Game>>, ApiError> {
    let name = request.name.as_deref().filter(|s| !s.is_empty());
    let platform = request.platform.as_deref().filter(|s| !s.is_empty());

    let games = store::search(&state.db, name, platform)
        .await
        .map_err(|e| ApiError::new("search games", e))?;
    Ok(Json(games))
}
