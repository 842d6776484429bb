//! Provider wiring settings.

use serde::{Deserialize, Serialize};

/// Models and endpoints used by the city providers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// Model generating city history
    #[serde(default = "default_history_model")]
    pub history_model: String,

    /// Model generating weather
    #[serde(default = "default_weather_model")]
    pub weather_model: String,

    /// Path or URL of the placeholder renderer, used in fallback image URLs
    #[serde(default = "default_placeholder_endpoint")]
    pub placeholder_endpoint: String,
}

fn default_history_model() -> String {
    "gemini-1.5-flash-8b".to_string()
}

fn default_weather_model() -> String {
    "gemini-1.5-pro".to_string()
}

fn default_placeholder_endpoint() -> String {
    "/image-placeholder".to_string()
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            history_model: default_history_model(),
            weather_model: default_weather_model(),
            placeholder_endpoint: default_placeholder_endpoint(),
        }
    }
}
