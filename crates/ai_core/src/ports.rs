//! Port definitions for inference engine
//!
//! Defines the traits (ports) that inference adapters must implement.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::InferenceError;

/// Request for inference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceRequest {
    /// Messages in the conversation
    pub messages: Vec<InferenceMessage>,
    /// Model to use (overrides config default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// A message in the inference request
///
/// `role` is `user` or `assistant`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceMessage {
    pub role: String,
    pub content: String,
}

impl InferenceMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

impl InferenceRequest {
    /// Create a simple single-turn request
    pub fn simple(user_message: impl Into<String>) -> Self {
        Self {
            messages: vec![InferenceMessage::user(user_message)],
            model: None,
        }
    }

    /// Set the model for this request
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Response from inference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceResponse {
    /// Generated content
    pub content: String,
    /// Model that generated the response
    pub model: String,
    /// Token usage statistics
    pub usage: Option<TokenUsage>,
    /// Finish reason
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Port for inference engine implementations
#[async_trait]
pub trait InferenceEngine: Send + Sync {
    /// Generate a complete response
    async fn generate(&self, request: InferenceRequest)
    -> Result<InferenceResponse, InferenceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inference_request_simple() {
        let req = InferenceRequest::simple("Hello");
        assert_eq!(req.messages.len(), 1);
        assert_eq!(req.messages[0].role, "user");
        assert_eq!(req.messages[0].content, "Hello");
    }

    #[test]
    fn inference_request_with_model() {
        let req = InferenceRequest::simple("Test").with_model("gemini-1.5-pro");
        assert_eq!(req.model.as_deref(), Some("gemini-1.5-pro"));
        assert_eq!(req.messages, vec![InferenceMessage::user("Test")]);
    }

    #[test]
    fn inference_request_skip_none_fields() {
        let req = InferenceRequest::simple("Test");
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("model"));
    }

    #[test]
    fn engine_is_object_safe() {
        fn _assert(_: &dyn InferenceEngine) {}
    }
}
