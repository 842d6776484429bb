//! CityLore HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::time::Duration;

use infrastructure::{AppConfig, init_logging};
use presentation_http::{create_app, state::AppState};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configuration first so the log format can be honoured
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    init_logging(config.server.log_format)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    info!("CityLore v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = &loaded {
        warn!("Failed to load config, using defaults: {}", e);
    }

    info!(
        host = %config.server.host,
        port = %config.server.port,
        history_model = %config.providers.history_model,
        weather_model = %config.providers.weather_model,
        gemini_configured = config.inference.is_configured(),
        unsplash_configured = config.unsplash.access_key_str().is_some(),
        "Configuration loaded"
    );

    let state = AppState::from_config(&config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize providers: {e}"))?;

    let app = create_app(state, &config.server);

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
///
/// Once a signal arrives, a watchdog exits the process if in-flight
/// connections have not drained within `timeout`.
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("Waiting up to {:?} for connections to close...", timeout);
    tokio::spawn(async move {
        tokio::time::sleep(timeout).await;
        warn!("Shutdown timeout elapsed, exiting");
        std::process::exit(1);
    });
}
