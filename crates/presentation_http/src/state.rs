//! Application state shared across handlers

use std::sync::Arc;

use application::{
    ApplicationError, CityHistoryService, HistoryService, ImageService, InferencePort,
    PhotoSearchPort, WeatherService,
};
use infrastructure::{AppConfig, GeminiInferenceAdapter, UnsplashPhotoAdapter};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Aggregator behind `/city-history`
    pub city_history: Arc<CityHistoryService>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(city_history: CityHistoryService) -> Self {
        Self {
            city_history: Arc::new(city_history),
        }
    }

    /// Wire adapters and providers from configuration
    ///
    /// Missing API keys are not errors here; the affected providers fail or
    /// fall back per request.
    pub fn from_config(config: &AppConfig) -> Result<Self, ApplicationError> {
        let inference: Arc<dyn InferencePort> =
            Arc::new(GeminiInferenceAdapter::new(config.inference.clone())?);
        let photos: Arc<dyn PhotoSearchPort> =
            Arc::new(UnsplashPhotoAdapter::new(&config.unsplash)?);

        let history = HistoryService::new(
            Arc::clone(&inference),
            config.providers.history_model.clone(),
        );
        let weather = WeatherService::new(inference, config.providers.weather_model.clone());
        let images = ImageService::new(photos, config.providers.placeholder_endpoint.clone());

        Ok(Self::new(CityHistoryService::new(
            Arc::new(history),
            Arc::new(images),
            Arc::new(weather),
        )))
    }
}
