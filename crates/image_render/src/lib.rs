//! Placeholder image rendering
//!
//! Rasterizes a solid-colour JPEG with a centred white caption. Used when no
//! photo is available for a city so that clients always have something to
//! show. Rendering is synchronous and deterministic for a given input.

mod error;
mod glyphs;
mod params;
mod render;

pub use error::RenderError;
pub use params::PlaceholderParams;
pub use render::{JPEG_QUALITY, rasterize, render_placeholder};
