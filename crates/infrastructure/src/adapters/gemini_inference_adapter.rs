//! Gemini inference adapter - Implements InferencePort using ai_core

use std::time::Instant;

use ai_core::{GeminiInferenceEngine, InferenceConfig, InferenceEngine, InferenceRequest};
use application::{
    error::ApplicationError,
    ports::{InferencePort, InferenceResult},
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Adapter for the Gemini `generateContent` API
#[derive(Debug)]
pub struct GeminiInferenceAdapter {
    engine: GeminiInferenceEngine,
}

impl GeminiInferenceAdapter {
    /// Create a new adapter with the given configuration
    pub fn new(config: InferenceConfig) -> Result<Self, ApplicationError> {
        let engine = GeminiInferenceEngine::new(config).map_err(Self::map_error)?;
        Ok(Self { engine })
    }

    /// Convert ai_core error to application error
    fn map_error(e: ai_core::InferenceError) -> ApplicationError {
        match e {
            ai_core::InferenceError::NotConfigured(msg) => ApplicationError::Configuration(msg),
            ai_core::InferenceError::RateLimited => ApplicationError::RateLimited,
            ai_core::InferenceError::ConnectionFailed(msg) => {
                ApplicationError::ExternalService(format!("Gemini connection failed: {msg}"))
            },
            ai_core::InferenceError::Timeout(ms) => {
                ApplicationError::ExternalService(format!("Inference timeout after {ms}ms"))
            },
            other => ApplicationError::Inference(other.to_string()),
        }
    }
}

#[async_trait]
impl InferencePort for GeminiInferenceAdapter {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn generate_with_model(
        &self,
        model: &str,
        prompt: &str,
    ) -> Result<InferenceResult, ApplicationError> {
        let start = Instant::now();
        let request = InferenceRequest::simple(prompt).with_model(model);

        let response = self
            .engine
            .generate(request)
            .await
            .map_err(Self::map_error)?;

        #[allow(clippy::cast_possible_truncation)]
        let latency_ms = start.elapsed().as_millis() as u64;

        debug!(
            model = %response.model,
            latency_ms,
            response_len = response.content.len(),
            "Gemini generation complete"
        );

        Ok(InferenceResult {
            content: response.content,
            model: response.model,
            tokens_used: response.usage.map(|u| u.total_tokens),
            latency_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_configured_maps_to_configuration() {
        let err = GeminiInferenceAdapter::map_error(ai_core::InferenceError::NotConfigured(
            "GEMINI_API_KEY is not set".into(),
        ));
        assert!(matches!(err, ApplicationError::Configuration(_)));
    }

    #[test]
    fn rate_limit_is_preserved() {
        let err = GeminiInferenceAdapter::map_error(ai_core::InferenceError::RateLimited);
        assert!(matches!(err, ApplicationError::RateLimited));
    }

    #[test]
    fn timeout_maps_to_external_service() {
        let err = GeminiInferenceAdapter::map_error(ai_core::InferenceError::Timeout(500));
        assert!(matches!(err, ApplicationError::ExternalService(ref m) if m.contains("500ms")));
    }

    #[tokio::test]
    async fn unconfigured_adapter_fails_fast() {
        let adapter = GeminiInferenceAdapter::new(InferenceConfig::default()).unwrap();

        let err = adapter
            .generate_with_model("gemini-1.5-pro", "hello")
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Configuration(_)));
    }
}
