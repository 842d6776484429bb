//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement the
//! inference and photo search ports. The provider ports are implemented by
//! the services in this crate and consumed by the aggregator.

mod city_providers;
mod inference_port;
mod photo_search_port;

#[cfg(test)]
pub use city_providers::{MockHistoryProvider, MockImageProvider, MockWeatherProvider};
pub use city_providers::{HistoryProvider, ImageProvider, WeatherProvider};
#[cfg(test)]
pub use inference_port::MockInferencePort;
pub use inference_port::{InferencePort, InferenceResult};
#[cfg(test)]
pub use photo_search_port::MockPhotoSearchPort;
pub use photo_search_port::{PhotoMatch, PhotoSearchPort};
