//! Common error types for gamedb

use thiserror::Error;

/// Common result type for gamedb operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy shared by the store layer and the feed pipeline
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested record not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Missing or invalid entity fields
    #[error("Validation error: {0}")]
    Validation(String),

    /// Network failure, non-2xx status, or malformed JSON from a remote feed
    #[error("Fetch error: {0}")]
    Fetch(String),
}
