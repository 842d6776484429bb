//! Inference errors

use thiserror::Error;

/// Errors that can occur during inference
#[derive(Debug, Error)]
pub enum InferenceError {
    /// No API key was supplied
    #[error("Inference not configured: {0}")]
    NotConfigured(String),

    /// Failed to connect to inference server
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to inference server failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// API key rejected
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Model not found or not served
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Response parsing failed or carried no text
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during inference
    #[error("Inference timeout after {0}ms")]
    Timeout(u64),

    /// Rate limit or quota exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Server error
    #[error("Server error: {0}")]
    ServerError(String),
}

impl InferenceError {
    /// Map a transport error, reporting the configured timeout
    pub(crate) fn from_transport(err: &reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout_ms)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }

    /// Whether the failure is caused by local configuration
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::NotConfigured(_) | Self::AuthenticationFailed(_))
    }
}
