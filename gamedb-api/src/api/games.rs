//! CRUD handlers for `/api/games`

use axum::{
    extract::{Path, State},
    Json,
};
use gamedb_common::db::{Game, GamePayload};
use serde::Serialize;

use crate::api::ApiError;
use crate::{store, AppState};

/// GET /api/games
pub async fn list_games(State(state): State<AppState>) -> Result<Json<Vec<Game>>, ApiError> {
    let games = store::list_all(&state.db)
        .await
        .map_err(|e| ApiError::new("list games", e))?;
    Ok(Json(games))
}

/// POST /api/games
pub async fn create_game(
    State(state): State<AppState>,
    Json(payload): Json<GamePayload>,
) -> Result<Json<Game>, ApiError> {
    let game = store::create(&state.db, &payload)
        .await
        .map_err(|e| ApiError::new("create game", e))?;
    Ok(Json(game))
}

/// PUT /api/games/:id
pub async fn update_game(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<GamePayload>,
) -> Result<Json<Game>, ApiError> {
    let game = store::update(&state.db, id, &payload)
        .await
        .map_err(|e| ApiError::new("update game", e))?;
    Ok(Json(game))
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub id: i64,
}

/// DELETE /api/games/:id
pub async fn delete_game(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    store::delete(&state.db, id)
        .await
        .map_err(|e| ApiError::new("delete game", e))?;
    Ok(Json(DeleteResponse { id }))
}
