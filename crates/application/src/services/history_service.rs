//! City history provider backed by an LLM
//!
//! Prompts for a summary, a chronological timeline and centre coordinates,
//! then validates the answer into a [`CityRecord`].

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use domain::{CityName, CityRecord, Coordinates, HistoricalEvent};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::json_extract::extract_json_object;
use crate::ports::{HistoryProvider, InferencePort};

const FETCH_FAILED: &str = "Failed to fetch city history";
const PROCESS_FAILED: &str = "Failed to process city data";

#[derive(Debug, Deserialize)]
struct HistoryDto {
    name: String,
    summary: String,
    events: Vec<EventDto>,
    #[serde(default)]
    coordinates: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct EventDto {
    year: i32,
    description: String,
}

/// Generates city history through an [`InferencePort`]
pub struct HistoryService {
    inference: Arc<dyn InferencePort>,
    model: String,
}

impl fmt::Debug for HistoryService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryService")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl HistoryService {
    pub fn new(inference: Arc<dyn InferencePort>, model: impl Into<String>) -> Self {
        Self {
            inference,
            model: model.into(),
        }
    }

    fn prompt(city: &CityName) -> String {
        // Quoted so names containing quotes still produce a valid template
        let quoted = serde_json::to_string(city.as_str()).unwrap_or_default();
        format!(
            "Write a historical profile of {city}.\n\
             Provide:\n\
             1. A short summary of why the city matters, at most 150 words.\n\
             2. Between 6 and 8 major historical events, oldest first.\n\
             3. The latitude and longitude of the city centre.\n\n\
             Answer with a single JSON object shaped exactly like this:\n\
             {{\n  \"name\": {quoted},\n  \"summary\": \"...\",\n  \
             \"events\": [{{ \"year\": 1234, \"description\": \"...\" }}],\n  \
             \"coordinates\": {{ \"lat\": 0.0, \"lng\": 0.0 }}\n}}\n\n\
             Keep each event description under 50 words and only include well documented, \
             significant events. Use negative years for BCE.\n\
             Respond with the JSON object only. Do not use markdown or code fences."
        )
    }

    fn parse(raw: &str) -> Result<CityRecord, ApplicationError> {
        let cleaned = extract_json_object(raw);
        let dto: HistoryDto = serde_json::from_str(&cleaned)
            .map_err(|e| ApplicationError::InvalidResponse(format!("malformed history: {e}")))?;

        let coordinates = dto.coordinates.as_ref().and_then(lenient_coordinates);
        let events = dto
            .events
            .into_iter()
            .map(|e| HistoricalEvent::new(e.year, e.description))
            .collect();

        Ok(CityRecord::new(dto.name, dto.summary, events, coordinates)?)
    }
}

/// Extract usable coordinates, dropping anything malformed or out of range
fn lenient_coordinates(value: &serde_json::Value) -> Option<Coordinates> {
    let lat = value.get("lat")?.as_f64()?;
    let lng = value.get("lng")?.as_f64()?;
    match Coordinates::new(lat, lng) {
        Ok(c) => Some(c),
        Err(e) => {
            warn!(error = %e, "Discarding coordinates");
            None
        },
    }
}

#[async_trait]
impl HistoryProvider for HistoryService {
    #[instrument(skip(self), fields(city = %city, model = %self.model))]
    async fn fetch_history(&self, city: &CityName) -> Result<CityRecord, ApplicationError> {
        let response = self
            .inference
            .generate_with_model(&self.model, &Self::prompt(city))
            .await
            .map_err(|e| {
                warn!(error = %e, "History generation failed");
                ApplicationError::ExternalService(FETCH_FAILED.to_string())
            })?;

        debug!(latency_ms = response.latency_ms, "History generated");

        Self::parse(&response.content).map_err(|e| {
            warn!(error = %e, raw = %response.content, "Unusable history response");
            ApplicationError::InvalidResponse(PROCESS_FAILED.to_string())
        })
    }
}
