//! Configuration for the inference engine

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Configuration for the Gemini inference engine
#[derive(Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// API key for the Generative Language API (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Base URL of the Generative Language API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model used when a request does not name one
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum output tokens
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Temperature for sampling (0.0 - 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Top-p (nucleus) sampling
    #[serde(default = "default_top_p")]
    pub top_p: f32,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-1.5-flash-8b".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000
}

const fn default_max_tokens() -> u32 {
    2048
}

const fn default_temperature() -> f32 {
    0.7
}

const fn default_top_p() -> f32 {
    0.95
}

impl std::fmt::Debug for InferenceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceConfig")
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("base_url", &self.base_url)
            .field("default_model", &self.default_model)
            .field("timeout_ms", &self.timeout_ms)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("top_p", &self.top_p)
            .finish()
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            default_model: default_model(),
            timeout_ms: default_timeout_ms(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            top_p: default_top_p(),
        }
    }
}

impl InferenceConfig {
    /// Get the API key as a string reference (for API calls)
    #[must_use]
    pub fn api_key_str(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .filter(|k| !k.trim().is_empty())
    }

    /// Whether an API key is present
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key_str().is_some()
    }

    /// Set the API key
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(key.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = InferenceConfig::default();
        assert_eq!(config.base_url, "https://generativelanguage.googleapis.com");
        assert_eq!(config.default_model, "gemini-1.5-flash-8b");
        assert_eq!(config.timeout_ms, 30000);
        assert_eq!(config.max_tokens, 2048);
        assert!((config.temperature - 0.7).abs() < 0.01);
        assert!(config.api_key.is_none());
        assert!(!config.is_configured());
    }

    #[test]
    fn with_api_key_configures() {
        let config = InferenceConfig::default().with_api_key("abc");
        assert_eq!(config.api_key_str(), Some("abc"));
        assert!(config.is_configured());
    }

    #[test]
    fn blank_api_key_is_unconfigured() {
        let config = InferenceConfig::default().with_api_key("   ");
        assert!(!config.is_configured());
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = InferenceConfig::default().with_api_key("super-secret");
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn serialization_skips_api_key() {
        let config = InferenceConfig::default().with_api_key("super-secret");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("api_key"));
        assert!(json.contains("default_model"));
    }

    #[test]
    fn deserialization_with_defaults() {
        let config: InferenceConfig = serde_json::from_str(r#"{"api_key":"k"}"#).unwrap();
        assert_eq!(config.api_key_str(), Some("k"));
        assert_eq!(config.timeout_ms, 30000);
    }
}
