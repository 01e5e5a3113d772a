//! # Error Handling Middleware
//!
//! Maps domain errors onto HTTP responses. Validation failures become 400s
//! with the message inline; persistence failures surface as 500s rather
//! than being retried or swallowed, since every request here is a single
//! small-table read or write.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use eventpoll_core::errors::PollError;

/// Application error wrapper that provides HTTP status code mapping.
///
/// Wraps a domain [`PollError`] and implements `IntoResponse` so handlers
/// can return `Result<Json<T>, AppError>` and use `?` throughout.
#[derive(Debug)]
pub struct AppError(pub PollError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            PollError::Validation(_) => StatusCode::BAD_REQUEST,
            PollError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PollError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

impl From<PollError> for AppError {
    fn from(err: PollError) -> Self {
        AppError(err)
    }
}

/// Repository-level failures arrive as `eyre::Report` and are persistence
/// errors by definition.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(PollError::Database(err))
    }
}
