//! Photo search error types

use thiserror::Error;

/// Errors that can occur during photo search
#[derive(Debug, Error)]
pub enum PhotoSearchError {
    /// Connection to the search service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to search service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from search service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Search query is invalid or empty
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Access key is missing or rejected
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Hourly request quota exhausted
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Search returned no photos
    #[error("No photos found for query: {query}")]
    NoResults {
        /// The search query that returned no results
        query: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl PhotoSearchError {
    /// Returns true if the caller should treat this as a plain miss
    #[must_use]
    pub const fn is_miss(&self) -> bool {
        matches!(self, Self::NoResults { .. })
    }
}
