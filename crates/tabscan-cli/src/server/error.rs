//! API error types and handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tabscan::TabscanError;

/// API error type. Pipeline failures map to distinct status codes instead
/// of leaking raw internals as a 200.
#[derive(Debug)]
pub enum ApiError {
    /// Source data could not be accessed.
    NotFound(String),
    /// Source data was malformed or empty.
    Unprocessable(String),
    /// Internal server error.
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::Unprocessable(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable", msg)
            }
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal", msg),
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

impl From<TabscanError> for ApiError {
    fn from(err: TabscanError) -> Self {
        match err {
            TabscanError::DataAccess { .. } => ApiError::NotFound(err.to_string()),
            TabscanError::MalformedInput(_) | TabscanError::EmptyInput(_) => {
                ApiError::Unprocessable(err.to_string())
            }
            TabscanError::Json(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Unprocessable(msg) => write!(f, "Unprocessable: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
