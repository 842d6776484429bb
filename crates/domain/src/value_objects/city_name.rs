//! City name value object
//!
//! The only user input the system accepts. Surrounding whitespace is
//! trimmed and the result must be non-empty.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::CityName;
//!
//! let city = CityName::new("  Rome ").expect("valid city");
//! assert_eq!(city.as_str(), "Rome");
//!
//! assert!(CityName::new("   ").is_err());
//! ```

use serde::Serialize;
use std::fmt;

use crate::DomainError;

/// A trimmed, non-empty city name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CityName(String);

impl CityName {
    /// Longest accepted name, in characters
    pub const MAX_CHARS: usize = 120;

    /// Create a validated city name
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingCityName` if the input is blank and
    /// `DomainError::ValidationError` if it exceeds [`Self::MAX_CHARS`].
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::MissingCityName);
        }
        if trimmed.chars().count() > Self::MAX_CHARS {
            return Err(DomainError::validation(format!(
                "City name must be at most {} characters",
                Self::MAX_CHARS
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Parse an optional query parameter
    ///
    /// Absent and blank values are treated the same way.
    pub fn from_query(raw: Option<&str>) -> Result<Self, DomainError> {
        raw.map_or(Err(DomainError::MissingCityName), Self::new)
    }

    /// Get the name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
