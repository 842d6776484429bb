//! Aggregated overview returned to clients

use serde::Serialize;

use crate::{CityRecord, ImageRecord, WeatherRecord};

/// Image slots attached to an overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroImages {
    pub hero: ImageRecord,
}

/// History, hero image and optional weather for one city
///
/// Serializes as the history fields at top level plus `images` and, when
/// present, `weather`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityOverview {
    #[serde(flatten)]
    pub history: CityRecord,
    pub images: HeroImages,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherRecord>,
}

impl CityOverview {
    #[must_use]
    pub const fn new(history: CityRecord, hero: ImageRecord, weather: Option<WeatherRecord>) -> Self {
        Self {
            history,
            images: HeroImages { hero },
            weather,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HistoricalEvent;

    fn history() -> CityRecord {
        CityRecord::new(
            "Lisbon",
            "Coastal capital.",
            vec![HistoricalEvent::new(1755, "Great earthquake")],
            None,
        )
        .unwrap()
    }

    #[test]
    fn flattens_history_fields() {
        let overview = CityOverview::new(
            history(),
            ImageRecord::placeholder("/p", "View of Lisbon"),
            None,
        );
        let json = serde_json::to_value(&overview).unwrap();
        assert_eq!(json["name"], "Lisbon");
        assert_eq!(json["summary"], "Coastal capital.");
        assert_eq!(json["events"][0]["year"], 1755);
        assert_eq!(json["images"]["hero"]["url"], "/p");
        assert!(json.get("history").is_none());
    }

    #[test]
    fn weather_key_omitted_when_absent() {
        let overview = CityOverview::new(history(), ImageRecord::placeholder("/p", "a"), None);
        let json = serde_json::to_value(&overview).unwrap();
        assert!(json.as_object().unwrap().get("weather").is_none());
    }

    #[test]
    fn weather_included_when_present() {
        let weather = WeatherRecord::new(18.0, "Cloudy", 70.0, 9.0, "Mild and grey").unwrap();
        let overview = CityOverview::new(history(), ImageRecord::placeholder("/p", "a"), Some(weather));
        let json = serde_json::to_value(&overview).unwrap();
        assert_eq!(json["weather"]["condition"], "Cloudy");
        assert_eq!(json["weather"]["windSpeed"], 9.0);
    }
}
