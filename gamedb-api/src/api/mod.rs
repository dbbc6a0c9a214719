//! HTTP API handlers for gamedb-api

pub mod error;
pub mod games;
pub mod health;
pub mod populate;
pub mod search;

pub use error::ApiError;
pub use games::{create_game, delete_game, list_games, update_game};
pub use health::health_routes;
pub use populate::populate_games;
pub use search::search_games;
