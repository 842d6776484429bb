//! Inference port - Interface for LLM text generation

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Result of an inference call
#[derive(Debug, Clone)]
pub struct InferenceResult {
    /// Generated response content
    pub content: String,
    /// Model used for generation
    pub model: String,
    /// Number of tokens used (if available)
    pub tokens_used: Option<u32>,
    /// Latency in milliseconds
    pub latency_ms: u64,
}

/// Port for inference operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait InferencePort: Send + Sync {
    /// Generate a response with a specific model
    async fn generate_with_model(
        &self,
        model: &str,
        prompt: &str,
    ) -> Result<InferenceResult, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn InferencePort>();
    }

    #[tokio::test]
    async fn mock_generate_with_model() {
        let mut mock = MockInferencePort::new();
        mock.expect_generate_with_model()
            .withf(|model, _| model == "gemini-1.5-pro")
            .returning(|model, _| {
                Ok(InferenceResult {
                    content: "{}".to_string(),
                    model: model.to_string(),
                    tokens_used: None,
                    latency_ms: 5,
                })
            });

        let result = mock.generate_with_model("gemini-1.5-pro", "hi").await.unwrap();
        assert_eq!(result.model, "gemini-1.5-pro");
    }
}
