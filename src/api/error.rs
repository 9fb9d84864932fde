/// Error type returned by the project endpoints
///
/// Two kinds only: client input that failed binding or validation, and anything the
/// storage layer reported. Both render as `{"error": "<message>"}`.

use crate::project::ValidationError;
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Rejected before any storage call
    #[error("Invalid Input: {0}")]
    InvalidInput(String),

    /// Driver error, passed through verbatim
    #[error(transparent)]
    Storage(#[from] sqlx::Error),
}

/// JSON body for every failed request
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        match self {
            ApiError::InvalidInput(_) => tracing::warn!("Rejected request: {}", message),
            ApiError::Storage(_) => tracing::error!("Storage failure: {}", message),
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
