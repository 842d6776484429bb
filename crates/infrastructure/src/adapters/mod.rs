//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod gemini_inference_adapter;
mod unsplash_photo_adapter;

pub use gemini_inference_adapter::GeminiInferenceAdapter;
pub use unsplash_photo_adapter::UnsplashPhotoAdapter;
