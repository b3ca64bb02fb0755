/// Error types for the comment service
///
/// Errors are converted to appropriate HTTP responses for API clients:
/// validation failures surface as structured field errors with a 400
/// status, missing resources as 404, storage failures as 500.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Result type for comment-service operations
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error on '{field}': {message}")]
    Validation { field: &'static str, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation { .. } | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match self {
            AppError::Validation { field, message } => {
                HttpResponse::build(status).json(serde_json::json!({
                    "errors": { (*field): [message] },
                    "status": status.as_u16(),
                }))
            }
            other => HttpResponse::build(status).json(serde_json::json!({
                "error": other.to_string(),
                "status": status.as_u16(),
            })),
        }
    }
}
