//! Current weather conditions for a city

use serde::Serialize;

use crate::DomainError;

/// Validated weather snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
    /// Degrees Celsius
    temperature: f64,
    condition: String,
    /// Relative humidity in percent
    humidity: f64,
    /// Kilometres per hour
    wind_speed: f64,
    description: String,
}

impl WeatherRecord {
    /// Plausible surface temperature range in °C
    pub const TEMPERATURE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=60.0;

    /// Build a record, enforcing physical bounds
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` when a numeric field is out of
    /// range or not finite, or a text field is blank.
    pub fn new(
        temperature: f64,
        condition: impl Into<String>,
        humidity: f64,
        wind_speed: f64,
        description: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let condition = condition.into().trim().to_string();
        let description = description.into().trim().to_string();

        if !Self::TEMPERATURE_RANGE.contains(&temperature) {
            return Err(DomainError::validation(format!(
                "temperature {temperature}°C out of range"
            )));
        }
        if !(0.0..=100.0).contains(&humidity) {
            return Err(DomainError::validation(format!(
                "humidity {humidity}% out of range"
            )));
        }
        if !wind_speed.is_finite() || wind_speed < 0.0 {
            return Err(DomainError::validation(format!(
                "wind speed {wind_speed} km/h is invalid"
            )));
        }
        if condition.is_empty() {
            return Err(DomainError::validation("condition is empty"));
        }
        if description.is_empty() {
            return Err(DomainError::validation("description is empty"));
        }

        Ok(Self {
            temperature,
            condition,
            humidity,
            wind_speed,
            description,
        })
    }

    #[must_use]
    pub const fn temperature(&self) -> f64 {
        self.temperature
    }

    #[must_use]
    pub fn condition(&self) -> &str {
        &self.condition
    }

    #[must_use]
    pub const fn humidity(&self) -> f64 {
        self.humidity
    }

    #[must_use]
    pub const fn wind_speed(&self) -> f64 {
        self.wind_speed
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}
