//! Integration tests for HTTP handlers
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use application::{
    ApplicationError, CityHistoryService, HistoryProvider, ImageProvider, WeatherProvider,
};
use async_trait::async_trait;
use axum::http::{StatusCode, header};
use axum_test::TestServer;
use domain::{CityName, CityRecord, HistoricalEvent, ImageRecord, WeatherRecord};
use infrastructure::ServerConfig;
use presentation_http::{create_app, state::AppState};

/// How a stub provider behaves
#[derive(Clone, Copy)]
enum Behaviour {
    Succeed,
    Fail,
    Panic,
}

#[derive(Default)]
struct Calls {
    history: AtomicUsize,
    images: AtomicUsize,
    weather: AtomicUsize,
}

impl Calls {
    fn total(&self) -> usize {
        self.history.load(Ordering::SeqCst)
            + self.images.load(Ordering::SeqCst)
            + self.weather.load(Ordering::SeqCst)
    }
}

struct StubHistory {
    behaviour: Behaviour,
    calls: Arc<Calls>,
}

#[async_trait]
impl HistoryProvider for StubHistory {
    async fn fetch_history(&self, city: &CityName) -> Result<CityRecord, ApplicationError> {
        self.calls.history.fetch_add(1, Ordering::SeqCst);
        match self.behaviour {
            Behaviour::Succeed => Ok(CityRecord::new(
                city.as_str(),
                "A city with a long past.",
                vec![
                    HistoricalEvent::new(-753, "Founded"),
                    HistoricalEvent::new(1871, "Became capital"),
                ],
                None,
            )
            .expect("valid record")),
            Behaviour::Fail => Err(ApplicationError::InvalidResponse(
                "Failed to process city data".to_string(),
            )),
            Behaviour::Panic => panic!("history provider exploded"),
        }
    }
}

struct StubImages {
    calls: Arc<Calls>,
}

#[async_trait]
impl ImageProvider for StubImages {
    async fn hero_image(&self, city: &CityName) -> ImageRecord {
        self.calls.images.fetch_add(1, Ordering::SeqCst);
        ImageRecord::placeholder(
            format!("/image-placeholder?width=1200&height=800&text={city}&bg=26f4b5"),
            format!("View of {city}"),
        )
    }

    async fn landmark_image(&self, landmark: &str) -> ImageRecord {
        ImageRecord::placeholder("/image-placeholder", format!("View of {landmark}"))
    }
}

struct StubWeather {
    behaviour: Behaviour,
    calls: Arc<Calls>,
}

#[async_trait]
impl WeatherProvider for StubWeather {
    async fn fetch_weather(&self, _city: &CityName) -> Result<WeatherRecord, ApplicationError> {
        self.calls.weather.fetch_add(1, Ordering::SeqCst);
        match self.behaviour {
            Behaviour::Fail | Behaviour::Panic => Err(ApplicationError::ExternalService(
                "Failed to fetch weather data".to_string(),
            )),
            Behaviour::Succeed => {
                Ok(WeatherRecord::new(22.5, "Sunny", 45.0, 10.0, "Warm and clear").expect("valid"))
            },
        }
    }
}

fn server(history: Behaviour, weather: Behaviour) -> (TestServer, Arc<Calls>) {
    let calls = Arc::new(Calls::default());
    let service = CityHistoryService::new(
        Arc::new(StubHistory {
            behaviour: history,
            calls: Arc::clone(&calls),
        }),
        Arc::new(StubImages {
            calls: Arc::clone(&calls),
        }),
        Arc::new(StubWeather {
            behaviour: weather,
            calls: Arc::clone(&calls),
        }),
    );

    let app = create_app(AppState::new(service), &ServerConfig::default());
    (TestServer::new(app).expect("test server"), calls)
}

// ============================================================================
// GET /city-history
// ============================================================================

mod city_history_tests {
    use super::*;

    #[tokio::test]
    async fn full_success() {
        let (server, calls) = server(Behaviour::Succeed, Behaviour::Succeed);

        let response = server.get("/city-history").add_query_param("city", "Rome").await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["name"], "Rome");
        assert_eq!(body["data"]["events"][0]["year"], -753);
        assert_eq!(body["data"]["images"]["hero"]["generatedBy"], "Generated Placeholder");
        assert_eq!(body["data"]["weather"]["windSpeed"], 10.0);
        assert!(body["data"].get("coordinates").is_none());
        assert_eq!(calls.total(), 3);
    }

    #[tokio::test]
    async fn weather_failure_omits_weather_key() {
        let (server, _) = server(Behaviour::Succeed, Behaviour::Fail);

        let response = server.get("/city-history").add_query_param("city", "Rome").await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], true);
        assert!(body["data"].get("weather").is_none());
        assert!(body["data"]["images"]["hero"].is_object());
    }

    #[tokio::test]
    async fn history_failure_is_server_error_without_data() {
        let (server, calls) = server(Behaviour::Fail, Behaviour::Succeed);

        let response = server.get("/city-history").add_query_param("city", "Rome").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Failed to process city data");
        assert!(body.get("data").is_none());
        assert_eq!(calls.weather.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn missing_city_is_rejected_without_provider_calls() {
        let (server, calls) = server(Behaviour::Succeed, Behaviour::Succeed);

        let response = server.get("/city-history").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "City name is required");
        assert_eq!(calls.total(), 0);
    }

    #[tokio::test]
    async fn blank_city_is_rejected() {
        let (server, calls) = server(Behaviour::Succeed, Behaviour::Succeed);

        let response = server.get("/city-history").add_query_param("city", "   ").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(calls.total(), 0);
    }

    #[tokio::test]
    async fn repeated_city_uses_first_value() {
        let (server, calls) = server(Behaviour::Succeed, Behaviour::Succeed);

        let response = server.get("/city-history?city=Rome&city=Paris").await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["name"], "Rome");
        assert_eq!(calls.history.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn panicking_provider_becomes_json_500() {
        let (server, _) = server(Behaviour::Panic, Behaviour::Succeed);

        let response = server.get("/city-history").add_query_param("city", "Rome").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "history provider exploded");
    }
}

// ============================================================================
// GET /image-placeholder
// ============================================================================

mod placeholder_tests {
    use super::*;

    #[tokio::test]
    async fn renders_requested_size() {
        let (server, _) = server(Behaviour::Succeed, Behaviour::Succeed);

        let response = server
            .get("/image-placeholder")
            .add_query_param("width", "100")
            .add_query_param("height", "50")
            .add_query_param("text", "Rome")
            .add_query_param("bg", "26f4b5")
            .await;

        response.assert_status_ok();
        assert_eq!(response.header(header::CONTENT_TYPE), "image/jpeg");
        assert_eq!(
            response.header(header::CACHE_CONTROL),
            "public, max-age=31536000, immutable"
        );

        let bytes = response.as_bytes();
        assert!(!bytes.is_empty());
        let decoded = image::load_from_memory(bytes).expect("valid jpeg");
        assert_eq!((decoded.width(), decoded.height()), (100, 50));
    }

    #[tokio::test]
    async fn garbage_parameters_fall_back_to_defaults() {
        let (server, _) = server(Behaviour::Succeed, Behaviour::Succeed);

        let response = server
            .get("/image-placeholder")
            .add_query_param("width", "wide")
            .add_query_param("bg", "not-a-colour")
            .await;

        response.assert_status_ok();
        let decoded = image::load_from_memory(response.as_bytes()).expect("valid jpeg");
        assert_eq!((decoded.width(), decoded.height()), (1200, 800));
    }

    #[tokio::test]
    async fn repeated_size_uses_first_value() {
        let (server, _) = server(Behaviour::Succeed, Behaviour::Succeed);

        let response = server
            .get("/image-placeholder?width=64&width=128&height=32")
            .await;

        response.assert_status_ok();
        let decoded = image::load_from_memory(response.as_bytes()).expect("valid jpeg");
        assert_eq!((decoded.width(), decoded.height()), (64, 32));
    }

    #[tokio::test]
    async fn oversized_request_is_clamped() {
        let (server, _) = server(Behaviour::Succeed, Behaviour::Succeed);

        let response = server
            .get("/image-placeholder")
            .add_query_param("width", "100000")
            .add_query_param("height", "10")
            .await;

        response.assert_status_ok();
        let decoded = image::load_from_memory(response.as_bytes()).expect("valid jpeg");
        assert_eq!(decoded.width(), 4096);
    }
}

// ============================================================================
// GET /health
// ============================================================================

#[tokio::test]
async fn health_reports_version() {
    let (server, _) = server(Behaviour::Succeed, Behaviour::Succeed);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
