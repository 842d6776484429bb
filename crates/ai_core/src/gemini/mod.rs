//! Google Gemini inference engine
//!
//! Talks to the Generative Language REST API (`v1beta`). Only non-streaming
//! `generateContent` calls are used.

mod api;
mod client;

pub use client::GeminiInferenceEngine;
