//! Gemini client implementation

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::config::InferenceConfig;
use crate::error::InferenceError;
use crate::ports::{InferenceEngine, InferenceRequest, InferenceResponse, TokenUsage};

use super::api::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig};

const API_KEY_HEADER: &str = "x-goog-api-key";

fn with_key(builder: RequestBuilder, key: &str) -> RequestBuilder {
    builder.header(API_KEY_HEADER, key)
}

/// Inference engine backed by the Gemini `generateContent` endpoint
pub struct GeminiInferenceEngine {
    client: Client,
    config: InferenceConfig,
}

impl std::fmt::Debug for GeminiInferenceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiInferenceEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GeminiInferenceEngine {
    /// Create a new Gemini inference engine
    ///
    /// A missing API key is not an error here. Calls made without one fail
    /// with [`InferenceError::NotConfigured`].
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| InferenceError::ConnectionFailed(e.to_string()))?;

        if config.is_configured() {
            info!(
                base_url = %config.base_url,
                model = %config.default_model,
                "Initialized Gemini inference engine"
            );
        } else {
            warn!("No Gemini API key configured - text generation is disabled");
        }

        Ok(Self { client, config })
    }

    /// Build the `generateContent` URL for a model
    fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    /// Get the model to use for a request
    fn resolve_model<'a>(&'a self, request: &'a InferenceRequest) -> &'a str {
        request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model)
    }

    fn api_key(&self) -> Result<&str, InferenceError> {
        self.config.api_key_str().ok_or_else(|| {
            InferenceError::NotConfigured("GEMINI_API_KEY is not set".to_string())
        })
    }

    fn build_payload(&self, request: &InferenceRequest) -> GenerateContentRequest {
        let contents = request
            .messages
            .iter()
            .map(|message| {
                let role = match message.role.as_str() {
                    "assistant" | "model" => "model",
                    _ => "user",
                };
                Content::text(role, message.content.clone())
            })
            .collect();

        GenerateContentRequest {
            contents,
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                top_p: self.config.top_p,
                max_output_tokens: self.config.max_tokens,
            },
        }
    }

    fn status_error(status: StatusCode, body: String, model: &str) -> InferenceError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                InferenceError::AuthenticationFailed(format!("Status {status}"))
            },
            StatusCode::NOT_FOUND => InferenceError::ModelNotAvailable(model.to_string()),
            StatusCode::TOO_MANY_REQUESTS => InferenceError::RateLimited,
            _ => InferenceError::ServerError(format!("Status {status}: {body}")),
        }
    }
}

#[async_trait]
impl InferenceEngine for GeminiInferenceEngine {
    #[instrument(skip(self, request), fields(model = %self.resolve_model(&request)))]
    async fn generate(&self, request: InferenceRequest) -> Result<InferenceResponse, InferenceError> {
        let key = self.api_key()?;
        let model = self.resolve_model(&request).to_string();
        let payload = self.build_payload(&request);

        debug!("Sending request to Gemini");

        let response = with_key(self.client.post(self.generate_url(&model)), key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| InferenceError::from_transport(&e, self.config.timeout_ms))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Inference request failed");
            return Err(Self::status_error(status, body, &model));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        if let Some(reason) = body
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            warn!(reason = %reason, "Prompt was blocked");
            return Err(InferenceError::InvalidResponse(format!(
                "prompt blocked: {reason}"
            )));
        }

        let content = body.first_text().ok_or_else(|| {
            InferenceError::InvalidResponse("response contained no text".to_string())
        })?;

        let usage = body.usage_metadata.as_ref().map(|u| TokenUsage {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        });

        debug!(tokens = ?usage, "Inference completed");

        Ok(InferenceResponse {
            content,
            model: body.model_version.clone().unwrap_or(model),
            usage,
            finish_reason: body
                .candidates
                .first()
                .and_then(|c| c.finish_reason.clone()),
        })
    }
}
