//! City overview aggregation
//!
//! Runs history, hero image and weather concurrently and merges them into a
//! [`CityOverview`]. History is required; weather is best effort.

use std::fmt;
use std::sync::Arc;

use domain::{CityName, CityOverview, CityRecord, ImageRecord, WeatherRecord};
use tracing::{info, instrument};

use crate::error::ApplicationError;
use crate::fan_out::FanOut;
use crate::ports::{HistoryProvider, ImageProvider, WeatherProvider};

enum Fetched {
    History(CityRecord),
    Image(ImageRecord),
    Weather(WeatherRecord),
}

/// Aggregates every provider into one overview
pub struct CityHistoryService {
    history: Arc<dyn HistoryProvider>,
    images: Arc<dyn ImageProvider>,
    weather: Arc<dyn WeatherProvider>,
}

impl fmt::Debug for CityHistoryService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CityHistoryService").finish_non_exhaustive()
    }
}

impl CityHistoryService {
    pub fn new(
        history: Arc<dyn HistoryProvider>,
        images: Arc<dyn ImageProvider>,
        weather: Arc<dyn WeatherProvider>,
    ) -> Self {
        Self {
            history,
            images,
            weather,
        }
    }

    /// Build the overview for `city`
    ///
    /// All providers are started together and awaited to completion, even
    /// when history fails early.
    ///
    /// # Errors
    ///
    /// Returns the history provider's error when history is unavailable.
    #[instrument(skip(self), fields(city = %city))]
    pub async fn overview(&self, city: &CityName) -> Result<CityOverview, ApplicationError> {
        let mut joined = FanOut::new()
            .required("history", async {
                self.history.fetch_history(city).await.map(Fetched::History)
            })
            .required("image", async {
                Ok(Fetched::Image(self.images.hero_image(city).await))
            })
            .optional("weather", async {
                self.weather.fetch_weather(city).await.map(Fetched::Weather)
            })
            .join()
            .await?;

        let history = match joined.take("history") {
            Some(Fetched::History(h)) => h,
            _ => return Err(ApplicationError::Internal("history branch missing".into())),
        };
        let hero = match joined.take("image") {
            Some(Fetched::Image(i)) => i,
            _ => return Err(ApplicationError::Internal("image branch missing".into())),
        };
        let weather = match joined.take("weather") {
            Some(Fetched::Weather(w)) => Some(w),
            _ => None,
        };

        info!(
            events = history.events().len(),
            placeholder = hero.is_placeholder(),
            weather = weather.is_some(),
            "City overview assembled"
        );

        Ok(CityOverview::new(history, hero, weather))
    }
}
