//! Application error type mapping to HTTP status codes.
//!
//! Every error body has the shape `{"error": <message>, "status_code": <code>}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use somaleo_types::error::TutorError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Tutor flow errors.
    Tutor(TutorError),
    /// The request body could not be read or decoded.
    InvalidBody,
    /// No route matches the path.
    NotFound,
    /// The path exists but not for this method.
    MethodNotAllowed,
}

impl From<TutorError> for AppError {
    fn from(e: TutorError) -> Self {
        AppError::Tutor(e)
    }
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Tutor(e @ TutorError::Validation(_)) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::Tutor(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::InvalidBody => (StatusCode::BAD_REQUEST, "Invalid JSON body".to_string()),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            AppError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{message}");
        }

        let body = json!({
            "error": message,
            "status_code": status.as_u16(),
        });
        (status, Json(body)).into_response()
    }
}
