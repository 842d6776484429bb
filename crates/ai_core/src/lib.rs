//! AI Core - Text generation client
//!
//! Provides the inference abstraction used by the history and weather
//! providers, plus a Google Gemini implementation that talks to the
//! `generateContent` REST endpoint.
//!
//! The engine is built from an explicit [`InferenceConfig`]. When no API key
//! is configured the engine still constructs, but every generation call
//! short-circuits with [`InferenceError::NotConfigured`] before any network
//! I/O happens.

pub mod config;
pub mod error;
pub mod gemini;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use gemini::GeminiInferenceEngine;
pub use ports::{InferenceEngine, InferenceMessage, InferenceRequest, InferenceResponse, TokenUsage};
