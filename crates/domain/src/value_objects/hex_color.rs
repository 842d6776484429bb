//! RGB colour expressed as six hex digits
//!
//! Used for placeholder backgrounds. A colour can either be parsed from a
//! query parameter or derived deterministically from an arbitrary seed
//! string, so that the same city always gets the same placeholder.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::HexColor;
//!
//! let c = HexColor::parse("e2e8f0").expect("valid colour");
//! assert_eq!(c.rgb(), [0xe2, 0xe8, 0xf0]);
//! assert_eq!(HexColor::parse("#fff").expect("short form").to_string(), "ffffff");
//!
//! assert_eq!(HexColor::from_seed("Rome"), HexColor::from_seed("Rome"));
//! ```

use serde::{Serialize, Serializer};
use std::fmt;

use crate::DomainError;

/// An sRGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor([u8; 3]);

impl HexColor {
    /// Neutral slate used when no usable colour is supplied
    pub const DEFAULT: Self = Self([0xe2, 0xe8, 0xf0]);

    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Parse `rrggbb` or `rgb`, with or without a leading `#`
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidColor` for any other shape.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let digits = raw.trim().trim_start_matches('#');
        let invalid = || DomainError::InvalidColor(raw.to_string());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            6 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid())
                };
                Ok(Self([channel(0)?, channel(2)?, channel(4)?]))
            },
            3 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&digits[i..=i], 16)
                        .map(|v| v * 17)
                        .map_err(|_| invalid())
                };
                Ok(Self([channel(0)?, channel(1)?, channel(2)?]))
            },
            _ => Err(invalid()),
        }
    }

    /// Parse, falling back to [`Self::DEFAULT`]
    #[must_use]
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        raw.and_then(|r| Self::parse(r).ok()).unwrap_or(Self::DEFAULT)
    }

    /// Derive a stable colour from a seed string
    ///
    /// Runs the classic `hash * 31 + unit` string hash over UTF-16 code
    /// units, where the shift wraps at 32 bits but the accumulator does
    /// not. The hex digits of `|hash|` are truncated or right-padded with
    /// zeros to six.
    #[must_use]
    pub fn from_seed(seed: &str) -> Self {
        let mut hash: i64 = 0;
        for unit in seed.encode_utf16() {
            #[allow(clippy::cast_possible_truncation)]
            let shifted = i64::from((hash as i32).wrapping_shl(5));
            hash = i64::from(unit).wrapping_add(shifted.wrapping_sub(hash));
        }

        let mut digits = format!("{:x}", hash.unsigned_abs());
        digits.truncate(6);
        while digits.len() < 6 {
            digits.push('0');
        }

        Self::parse(&digits).unwrap_or(Self::DEFAULT)
    }

    #[must_use]
    pub const fn rgb(self) -> [u8; 3] {
        self.0
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "{r:02x}{g:02x}{b:02x}")
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
