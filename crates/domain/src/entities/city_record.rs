//! Historical record of a city

use serde::Serialize;

use crate::{Coordinates, DomainError};

/// One dated entry on a city's timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoricalEvent {
    /// Year of the event, negative for BCE
    pub year: i32,
    pub description: String,
}

impl HistoricalEvent {
    #[must_use]
    pub fn new(year: i32, description: impl Into<String>) -> Self {
        Self {
            year,
            description: description.into(),
        }
    }
}

/// A validated history of a city
///
/// Events are kept in the order they were supplied. They are not sorted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityRecord {
    name: String,
    summary: String,
    events: Vec<HistoricalEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    coordinates: Option<Coordinates>,
}

impl CityRecord {
    /// Upper bound on timeline length
    pub const MAX_EVENTS: usize = 32;

    /// Build a record, enforcing the schema
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the name or summary is
    /// blank, the timeline is empty or longer than [`Self::MAX_EVENTS`],
    /// or any event has a blank description.
    pub fn new(
        name: impl Into<String>,
        summary: impl Into<String>,
        events: Vec<HistoricalEvent>,
        coordinates: Option<Coordinates>,
    ) -> Result<Self, DomainError> {
        let name = name.into().trim().to_string();
        let summary = summary.into().trim().to_string();

        if name.is_empty() {
            return Err(DomainError::validation("city name is empty"));
        }
        if summary.is_empty() {
            return Err(DomainError::validation("summary is empty"));
        }
        if events.is_empty() {
            return Err(DomainError::validation("no historical events"));
        }
        if events.len() > Self::MAX_EVENTS {
            return Err(DomainError::validation(format!(
                "{} historical events exceed the limit of {}",
                events.len(),
                Self::MAX_EVENTS
            )));
        }
        if let Some(idx) = events.iter().position(|e| e.description.trim().is_empty()) {
            return Err(DomainError::validation(format!(
                "event {idx} has an empty description"
            )));
        }

        Ok(Self {
            name,
            summary,
            events,
            coordinates,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    #[must_use]
    pub fn events(&self) -> &[HistoricalEvent] {
        &self.events
    }

    #[must_use]
    pub const fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }
}
