#![forbid(unsafe_code)]
//! Photo search integration for CityLore
//!
//! Looks up a single representative photo for a free-text query via the
//! Unsplash search API (<https://unsplash.com/documentation#search-photos>).
//!
//! # Architecture
//!
//! [`PhotoSearchProvider`] is the trait the rest of the system depends on.
//! [`UnsplashClient`] implements it. The client refuses to construct without
//! an access key, so callers decide up front whether photo search is
//! available at all.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_unsplash::{Orientation, PhotoSearchProvider, UnsplashClient, UnsplashConfig};
//!
//! let client = UnsplashClient::new(&config)?;
//! let photo = client.search_photo("Rome city skyline architecture", Orientation::Landscape).await?;
//! println!("{} by {}", photo.url, photo.photographer_name);
//! ```

mod client;
mod config;
mod error;
mod models;
mod provider;

pub use client::UnsplashClient;
pub use config::UnsplashConfig;
pub use error::PhotoSearchError;
pub use models::{Orientation, Photo};
pub use provider::PhotoSearchProvider;
