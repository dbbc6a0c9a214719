//! HTTP boundary error translation
//!
//! Store and feed errors become an HTTP 400 with the error serialized in
//! the body. Internal tool: the raw error text is acceptable in the
//! response, and no request error ever takes the process down.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use gamedb_common::Error;
use serde_json::json;
use tracing::error;

/// Wrapper tying a domain error to the operation that raised it
#[derive(Debug)]
pub struct ApiError(Error);

impl ApiError {
    /// Log the failed operation and wrap the error for the response
    pub fn new(operation: &str, err: Error) -> Self {
        error!(operation = operation, error = %err, "Request failed");
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.0.to_string() }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
