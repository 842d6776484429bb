//! Domain entities - the records assembled into a city overview

mod city_overview;
mod city_record;
mod image_record;
mod weather_record;

pub use city_overview::{CityOverview, HeroImages};
pub use city_record::{CityRecord, HistoricalEvent};
pub use image_record::{ImageRecord, ImageSource, Photographer};
pub use weather_record::WeatherRecord;
