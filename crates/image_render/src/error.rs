//! Rendering errors

use thiserror::Error;

/// Errors that can occur while producing a placeholder
#[derive(Debug, Error)]
pub enum RenderError {
    /// JPEG encoding failed
    #[error("Image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}
