//! Placeholder parameters

use domain::HexColor;

/// Size, caption and colour of a placeholder image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderParams {
    width: u32,
    height: u32,
    text: String,
    background: HexColor,
}

impl PlaceholderParams {
    pub const DEFAULT_WIDTH: u32 = 1200;
    pub const DEFAULT_HEIGHT: u32 = 800;
    /// Largest accepted edge, in pixels
    pub const MAX_DIMENSION: u32 = 4096;
    /// Captions longer than this are cut
    pub const MAX_TEXT_CHARS: usize = 256;

    /// Build parameters, clamping sizes into `1..=MAX_DIMENSION`
    #[must_use]
    pub fn new(width: u32, height: u32, text: impl Into<String>, background: HexColor) -> Self {
        let text: String = text.into().chars().take(Self::MAX_TEXT_CHARS).collect();
        Self {
            width: width.clamp(1, Self::MAX_DIMENSION),
            height: height.clamp(1, Self::MAX_DIMENSION),
            text,
            background,
        }
    }

    /// Build parameters from raw query values
    ///
    /// Missing or unparsable values take the defaults: 1200x800, no text,
    /// background `e2e8f0`.
    #[must_use]
    pub fn from_query(
        width: Option<&str>,
        height: Option<&str>,
        text: Option<&str>,
        background: Option<&str>,
    ) -> Self {
        let dimension = |raw: Option<&str>, default: u32| {
            raw.and_then(|v| v.trim().parse::<u32>().ok())
                .unwrap_or(default)
        };

        Self::new(
            dimension(width, Self::DEFAULT_WIDTH),
            dimension(height, Self::DEFAULT_HEIGHT),
            text.unwrap_or_default(),
            HexColor::parse_or_default(background),
        )
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn background(&self) -> HexColor {
        self.background
    }
}

impl Default for PlaceholderParams {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_WIDTH,
            Self::DEFAULT_HEIGHT,
            String::new(),
            HexColor::DEFAULT,
        )
    }
}
