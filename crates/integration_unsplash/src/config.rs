//! Unsplash configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Configuration for the Unsplash photo search
#[derive(Clone, Serialize, Deserialize)]
pub struct UnsplashConfig {
    /// Access key (sensitive - uses SecretString). Photo search is disabled
    /// without it.
    #[serde(default, skip_serializing)]
    pub access_key: Option<SecretString>,

    /// Unsplash API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.unsplash.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl std::fmt::Debug for UnsplashConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnsplashConfig")
            .field(
                "access_key",
                &if self.access_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for UnsplashConfig {
    fn default() -> Self {
        Self {
            access_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl UnsplashConfig {
    /// Create a configuration for testing against a local server
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            access_key: Some(SecretString::from("test-access-key".to_string())),
            base_url: base_url.into(),
            timeout_secs: 5,
        }
    }

    /// Get the access key as a string reference (for API calls)
    #[must_use]
    pub fn access_key_str(&self) -> Option<&str> {
        self.access_key
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .filter(|k| !k.trim().is_empty())
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!("base_url must be an http(s) URL: {}", self.base_url));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UnsplashConfig::default();
        assert!(config.access_key_str().is_none());
        assert_eq!(config.base_url, "https://api.unsplash.com");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_testing_config() {
        let config = UnsplashConfig::for_testing("http://127.0.0.1:1234");
        assert_eq!(config.access_key_str(), Some("test-access-key"));
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let config = UnsplashConfig {
            access_key: Some(SecretString::from("  ".to_string())),
            ..Default::default()
        };
        assert!(config.access_key_str().is_none());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = UnsplashConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        let config = UnsplashConfig {
            base_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = UnsplashConfig::for_testing("http://localhost");
        let debug = format!("{config:?}");
        assert!(!debug.contains("test-access-key"));
        assert!(debug.contains("[REDACTED]"));
    }
}
