//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::limits::LimitViolation;
use crate::queue::{RepositoryError, SubmitError};

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Invalid request (malformed body or parameters)
    BadRequest(String),
    /// Submission rejected by platform validation
    Rejected(LimitViolation),
    /// Queue backend error
    Repository(RepositoryError),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Rejected(violation) => match violation {
                LimitViolation::EnvelopeViolation { .. } => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ApiError::new("EXCEEDS_LIMITS", violation.to_string()),
                ),
                LimitViolation::CapabilityMismatch { .. } => (
                    StatusCode::CONFLICT,
                    ApiError::new("COLLECTION_NOT_SUPPORTED", violation.to_string()),
                ),
            },
            AppError::Repository(err) => match err {
                RepositoryError::NotFound(msg) => {
                    (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg))
                }
                RepositoryError::DuplicateTask(task_id) => (
                    StatusCode::CONFLICT,
                    ApiError::new(
                        "DUPLICATE_TASK",
                        format!("tasking request {task_id} is already queued"),
                    ),
                ),
                other => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("REPOSITORY_ERROR", other.to_string()),
                ),
            },
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
        };

        (status, Json(error)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

impl From<SubmitError> for AppError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Rejected(violation) => AppError::Rejected(violation),
            SubmitError::Malformed(msg) => AppError::BadRequest(msg),
            SubmitError::Repository(err) => AppError::Repository(err),
        }
    }
}
