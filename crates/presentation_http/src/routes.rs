//! Route definitions and middleware stack

use axum::{Router, http::HeaderValue, http::Method, routing::get};
use infrastructure::ServerConfig;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::{error::panic_response, handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/city-history", get(handlers::city::city_history))
        .route("/image-placeholder", get(handlers::placeholder::image_placeholder))
        .with_state(state)
}

/// Router with tracing, CORS and panic recovery applied
pub fn create_app(state: AppState, server: &ServerConfig) -> Router {
    create_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&server.allowed_origins))
            .layer(CatchPanicLayer::custom(panic_response)),
    )
}

/// Any origin when none are configured, otherwise only the listed ones
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    if allowed_origins.is_empty() {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| {
            o.parse::<HeaderValue>()
                .inspect_err(|_| warn!(origin = %o, "Ignoring invalid CORS origin"))
                .ok()
        })
        .collect();
    base.allow_origin(origins)
}
