//! Application services - Use case implementations

mod city_history_service;
mod history_service;
mod image_service;
mod weather_service;

pub use city_history_service::CityHistoryService;
pub use history_service::HistoryService;
pub use image_service::{HERO_SIZE, ImageService, LANDMARK_SIZE};
pub use weather_service::WeatherService;
