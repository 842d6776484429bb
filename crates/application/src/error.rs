//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Inference/AI error
    #[error("Inference error: {0}")]
    Inference(String),

    /// Upstream provider could not be invoked
    ///
    /// The message is meant for clients and carries no upstream detail.
    #[error("{0}")]
    ExternalService(String),

    /// Upstream answered with data that failed parsing or validation
    #[error("{0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Whether the request itself was at fault
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}
