//! Provider ports consumed by the city overview aggregator
//!
//! History and weather report failures as errors. The image provider has no
//! error path: it always produces something renderable.

use async_trait::async_trait;
use domain::{CityName, CityRecord, ImageRecord, WeatherRecord};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Produces the historical record of a city
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    async fn fetch_history(&self, city: &CityName) -> Result<CityRecord, ApplicationError>;
}

/// Produces current weather for a city
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn fetch_weather(&self, city: &CityName) -> Result<WeatherRecord, ApplicationError>;
}

/// Produces hero and landmark images
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Wide image representing a city
    async fn hero_image(&self, city: &CityName) -> ImageRecord;

    /// Image of a named landmark
    async fn landmark_image(&self, landmark: &str) -> ImageRecord;
}
