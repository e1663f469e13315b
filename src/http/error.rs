//! API error types with IntoResponse
//!
//! Every error becomes a JSON body of the shape `{"error": <message>}` with
//! the appropriate status code. Per-request errors never take the process
//! down; only startup failures are fatal, and those are handled in `main`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Payload failed a schema check (400)
    Validation(ValidationError),

    /// Malformed request: bad id, undecodable body, unknown filter field (400)
    BadRequest(String),

    /// Storage fault during a query (500, logged)
    Database(mongodb::error::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::Database(e) => {
                tracing::error!(error = %e, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            // The unique email index rejecting a write is a caller mistake,
            // not a storage fault.
            DbError::Duplicate { .. } => Self::BadRequest(e.to_string()),
            DbError::Driver(e) => Self::Database(e),
        }
    }
}
