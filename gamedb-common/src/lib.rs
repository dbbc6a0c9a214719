//! # gamedb Common Library
//!
//! Shared code for the game catalog service:
//! - Error taxonomy
//! - Configuration loading
//! - Database initialization, migrations and models

pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};
