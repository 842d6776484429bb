//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// The city query was absent or blank
    #[error("City name is required")]
    MissingCityName,

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Malformed hex colour
    #[error("Invalid colour: {0}")]
    InvalidColor(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_city_name_message() {
        assert_eq!(
            DomainError::MissingCityName.to_string(),
            "City name is required"
        );
    }

    #[test]
    fn validation_error_message() {
        let err = DomainError::validation("field is required");
        assert_eq!(err.to_string(), "Validation failed: field is required");
    }

    #[test]
    fn invalid_color_message() {
        let err = DomainError::InvalidColor("zzz".to_string());
        assert_eq!(err.to_string(), "Invalid colour: zzz");
    }
}
