//! Database layer: initialization, migrations, and persisted models

pub mod init;
pub mod migrations;
pub mod models;

pub use init::{create_schema, init_database};
pub use models::{Game, GamePayload};
