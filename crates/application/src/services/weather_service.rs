//! Weather provider backed by an LLM
//!
//! There is no live weather feed. The model is asked for plausible conditions
//! given the city's climate and today's date.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domain::{CityName, WeatherRecord};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::json_extract::extract_json_object;
use crate::ports::{InferencePort, WeatherProvider};

const FETCH_FAILED: &str = "Failed to fetch weather data";
const PROCESS_FAILED: &str = "Failed to process weather data";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WeatherDto {
    temperature: f64,
    condition: String,
    humidity: f64,
    wind_speed: f64,
    description: String,
}

/// Generates plausible current weather through an [`InferencePort`]
pub struct WeatherService {
    inference: Arc<dyn InferencePort>,
    model: String,
}

impl fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherService")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl WeatherService {
    pub fn new(inference: Arc<dyn InferencePort>, model: impl Into<String>) -> Self {
        Self {
            inference,
            model: model.into(),
        }
    }

    fn prompt(city: &CityName) -> String {
        let today = Utc::now().format("%B %-d, %Y");
        format!(
            "Estimate the current weather in {city}. Today is {today}.\n\
             Base it on the city's usual climate, its location and the season.\n\n\
             Answer with a single JSON object with exactly these fields:\n\
             {{\n  \"temperature\": number (degrees Celsius),\n  \
             \"condition\": string (for example \"Sunny\", \"Cloudy\" or \"Rainy\"),\n  \
             \"humidity\": number (percent),\n  \
             \"windSpeed\": number (km/h),\n  \
             \"description\": string (at most 20 words)\n}}\n\n\
             Respond with the JSON object only."
        )
    }

    fn parse(raw: &str) -> Result<WeatherRecord, ApplicationError> {
        let cleaned = extract_json_object(raw);
        let dto: WeatherDto = serde_json::from_str(&cleaned)
            .map_err(|e| ApplicationError::InvalidResponse(format!("malformed weather: {e}")))?;

        Ok(WeatherRecord::new(
            dto.temperature,
            dto.condition,
            dto.humidity,
            dto.wind_speed,
            dto.description,
        )?)
    }
}

#[async_trait]
impl WeatherProvider for WeatherService {
    #[instrument(skip(self), fields(city = %city, model = %self.model))]
    async fn fetch_weather(&self, city: &CityName) -> Result<WeatherRecord, ApplicationError> {
        let response = self
            .inference
            .generate_with_model(&self.model, &Self::prompt(city))
            .await
            .map_err(|e| {
                warn!(error = %e, "Weather generation failed");
                ApplicationError::ExternalService(FETCH_FAILED.to_string())
            })?;

        debug!(latency_ms = response.latency_ms, "Weather generated");

        Self::parse(&response.content).map_err(|e| {
            warn!(error = %e, raw = %response.content, "Unusable weather response");
            ApplicationError::InvalidResponse(PROCESS_FAILED.to_string())
        })
    }
}
