//! Handler error taxonomy.
//!
//! Two-valued: validation failure (400) and not-found (404). Both map to an
//! empty-body response; the status code is the whole contract.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// No record matches the requested id.
    #[error("course not found")]
    NotFound,

    /// Required `title` is missing, null, or empty.
    #[error("title must be a non-empty string")]
    InvalidTitle,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidTitle => StatusCode::BAD_REQUEST,
        };
        status.into_response()
    }
}
