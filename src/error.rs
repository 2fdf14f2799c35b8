//! Error types for the air-quality service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ApiResponse;

// == AQI Error Enum ==
/// Unified error type for lookups and request handling.
#[derive(Error, Debug)]
pub enum AqiError {
    /// The upstream provider could not be reached
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The upstream provider answered with unusable data
    #[error("Upstream data invalid: {0}")]
    UpstreamDataInvalid(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AqiError {
    /// Returns the HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AqiError::UpstreamUnavailable(_)
            | AqiError::UpstreamDataInvalid(_)
            | AqiError::Validation(_) => StatusCode::BAD_REQUEST,
            AqiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AqiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            AqiError::UpstreamUnavailable(_) | AqiError::UpstreamDataInvalid(_) => {
                format!("Failed to fetch air quality data: {}", self)
            }
            _ => self.to_string(),
        };

        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the service.
pub type Result<T> = std::result::Result<T, AqiError>;
