//! Hero and landmark image descriptors

use serde::{Deserialize, Serialize};

/// Where an image came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSource {
    /// A photo returned by the Unsplash search API
    Unsplash,
    /// A locally rendered solid-colour placeholder
    #[serde(rename = "Generated Placeholder")]
    GeneratedPlaceholder,
}

/// Credit for a photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photographer {
    pub name: String,
    pub username: String,
    /// Profile page
    pub url: String,
}

/// Renderable image reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    pub url: String,
    pub alt: String,
    pub generated_by: ImageSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photographer: Option<Photographer>,
}

impl ImageRecord {
    /// Describe a searched photo
    #[must_use]
    pub fn photo(url: impl Into<String>, alt: impl Into<String>, photographer: Photographer) -> Self {
        Self {
            url: url.into(),
            alt: alt.into(),
            generated_by: ImageSource::Unsplash,
            photographer: Some(photographer),
        }
    }

    /// Describe a rendered placeholder
    #[must_use]
    pub fn placeholder(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: alt.into(),
            generated_by: ImageSource::GeneratedPlaceholder,
            photographer: None,
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.generated_by == ImageSource::GeneratedPlaceholder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_serialization() {
        let img = ImageRecord::placeholder("/image-placeholder?x", "View of Rome");
        let json = serde_json::to_value(&img).unwrap();
        assert_eq!(json["generatedBy"], "Generated Placeholder");
        assert_eq!(json["alt"], "View of Rome");
        assert!(json.get("photographer").is_none());
        assert!(img.is_placeholder());
    }

    #[test]
    fn photo_serialization() {
        let img = ImageRecord::photo(
            "https://images.example/rome.jpg",
            "Colosseum at dusk",
            Photographer {
                name: "Ada".to_string(),
                username: "ada".to_string(),
                url: "https://unsplash.com/@ada".to_string(),
            },
        );
        let json = serde_json::to_value(&img).unwrap();
        assert_eq!(json["generatedBy"], "Unsplash");
        assert_eq!(json["photographer"]["username"], "ada");
        assert!(!img.is_placeholder());
    }

    #[test]
    fn source_deserializes_from_wire_names() {
        let src: ImageSource = serde_json::from_str("\"Generated Placeholder\"").unwrap();
        assert_eq!(src, ImageSource::GeneratedPlaceholder);
    }
}
