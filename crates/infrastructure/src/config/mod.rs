//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `providers`: models and placeholder endpoint
//!
//! Client settings for Gemini and Unsplash live with their crates.

mod providers;
mod server;

use std::collections::HashMap;

use ai_core::InferenceConfig;
use integration_unsplash::UnsplashConfig;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use providers::ProvidersConfig;
pub use server::{LogFormat, ServerConfig};

/// Prefix for structured environment overrides (`CITYLORE_SERVER__PORT`)
pub const ENV_PREFIX: &str = "CITYLORE";
/// Conventional variable holding the Gemini key
pub const GEMINI_KEY_VAR: &str = "GEMINI_API_KEY";
/// Conventional variable holding the Unsplash key
pub const UNSPLASH_KEY_VAR: &str = "UNSPLASH_ACCESS_KEY";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Gemini text generation
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Unsplash photo search
    #[serde(default)]
    pub unsplash: UnsplashConfig,

    #[serde(default)]
    pub providers: ProvidersConfig,
}

impl AppConfig {
    /// Load configuration from an optional `config.toml` and the environment
    ///
    /// # Errors
    ///
    /// Returns an error when a source exists but cannot be parsed or holds
    /// values of the wrong type.
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut config = Self::build(
            config::File::with_name("config").required(false),
            None,
        )?;
        config.apply_key_fallbacks(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Build from a file source and an environment map
    ///
    /// `env` replaces the process environment when given.
    fn build<S>(file: S, env: Option<HashMap<String, String>>) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()
    }

    /// Fill missing secrets from the conventional variables
    ///
    /// Keys already set through the file or prefixed variables win.
    pub fn apply_key_fallbacks<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|k| !k.trim().is_empty());

        if self.inference.api_key_str().is_none() {
            let key = lookup(GEMINI_KEY_VAR);
            if present(&key) {
                debug!(var = GEMINI_KEY_VAR, "Using fallback API key");
                self.inference.api_key = key.map(SecretString::from);
            }
        }

        if self.unsplash.access_key_str().is_none() {
            let key = lookup(UNSPLASH_KEY_VAR);
            if present(&key) {
                debug!(var = UNSPLASH_KEY_VAR, "Using fallback access key");
                self.unsplash.access_key = key.map(SecretString::from);
            }
        }
    }
}
