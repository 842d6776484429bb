//! Photo search data models

use serde::{Deserialize, Serialize};

/// Requested photo orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
    Squarish,
}

impl Orientation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
            Self::Squarish => "squarish",
        }
    }
}

/// A photo found by search, with attribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Unsplash photo id
    pub id: String,

    /// Regular-resolution image URL (1080px wide)
    pub url: String,

    /// Alternative text if the photo has one
    pub alt_description: Option<String>,

    /// Display name of the photographer
    pub photographer_name: String,

    /// Unsplash username of the photographer
    pub photographer_username: String,

    /// Photographer's profile page
    pub photographer_url: String,
}
