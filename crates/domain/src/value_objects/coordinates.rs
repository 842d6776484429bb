//! Geographic coordinates of a city centre

use serde::Serialize;
use std::fmt;

/// Latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    /// Latitude in degrees (-90 to 90)
    lat: f64,
    /// Longitude in degrees (-180 to 180)
    lng: f64,
}

/// Error type for invalid coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidCoordinates {
    pub lat: f64,
    pub lng: f64,
}

impl fmt::Display for InvalidCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid coordinates ({}, {}): latitude must be -90 to 90, longitude must be -180 to 180",
            self.lat, self.lng
        )
    }
}

impl std::error::Error for InvalidCoordinates {}

impl Coordinates {
    /// Create coordinates with validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` if latitude is not in [-90, 90],
    /// longitude is not in [-180, 180], or either value is not finite.
    pub fn new(lat: f64, lng: f64) -> Result<Self, InvalidCoordinates> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(InvalidCoordinates { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.lng
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}
