//! API error handling
//!
//! Every failure is rendered as `{ "success": false, "error": <message> }`.

use std::any::Any;

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DomainError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Message used when a failure carries none
pub const FALLBACK_MESSAGE: &str = "Failed to process request";

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        let msg = self.to_string();
        if msg.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            msg
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if status.is_server_error() {
            error!(error = %message, "Request failed");
        }

        let body = ErrorResponse {
            success: false,
            error: message,
        };
        (status, Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => e.into(),
            other => Self::Internal(other.to_string()),
        }
    }
}

/// Response for a panic caught by the catch-panic layer
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|s| (*s).to_string()))
        .unwrap_or_default();

    error!(panic = %detail, "Handler panicked");
    ApiError::Internal(detail).into_response()
}
