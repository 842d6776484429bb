//! Hero and landmark imagery
//!
//! Searches for a photo first and falls back to a rendered placeholder URL,
//! so callers always get something to display.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use domain::{CityName, HexColor, ImageRecord};
use tracing::{debug, instrument, warn};

use crate::ports::{ImageProvider, PhotoSearchPort};
use crate::urlencoding::encode_component;

/// Placeholder size for hero images
pub const HERO_SIZE: (u32, u32) = (1200, 800);
/// Placeholder size for landmark images
pub const LANDMARK_SIZE: (u32, u32) = (800, 600);

/// Image provider with photo search and placeholder fallback
pub struct ImageService {
    photos: Arc<dyn PhotoSearchPort>,
    placeholder_endpoint: String,
}

impl fmt::Debug for ImageService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageService")
            .field("placeholder_endpoint", &self.placeholder_endpoint)
            .field("photos_configured", &self.photos.is_configured())
            .finish()
    }
}

impl ImageService {
    /// `placeholder_endpoint` is the path or URL serving rendered placeholders
    pub fn new(photos: Arc<dyn PhotoSearchPort>, placeholder_endpoint: impl Into<String>) -> Self {
        Self {
            photos,
            placeholder_endpoint: placeholder_endpoint.into(),
        }
    }

    /// URL of the rendered placeholder for `name`
    ///
    /// The background colour is derived from `name`, so repeated calls give
    /// the same image.
    #[must_use]
    pub fn placeholder_url(&self, name: &str, (width, height): (u32, u32)) -> String {
        format!(
            "{}?width={width}&height={height}&text={}&bg={}",
            self.placeholder_endpoint,
            encode_component(name),
            HexColor::from_seed(name)
        )
    }

    async fn resolve(&self, name: &str, query: &str, size: (u32, u32)) -> ImageRecord {
        let alt_fallback = format!("View of {name}");

        if !self.photos.is_configured() {
            warn!("UNSPLASH_ACCESS_KEY is not configured, using placeholder");
            return ImageRecord::placeholder(self.placeholder_url(name, size), alt_fallback);
        }

        match self.photos.find_photo(query).await {
            Ok(Some(photo)) => {
                debug!(url = %photo.url, "Photo found");
                let alt = photo.alt.unwrap_or(alt_fallback);
                ImageRecord::photo(photo.url, alt, photo.photographer)
            },
            Ok(None) => {
                debug!(query, "No photo found, using placeholder");
                ImageRecord::placeholder(self.placeholder_url(name, size), alt_fallback)
            },
            Err(e) => {
                warn!(error = %e, query, "Photo search failed, using placeholder");
                ImageRecord::placeholder(self.placeholder_url(name, size), alt_fallback)
            },
        }
    }
}

#[async_trait]
impl ImageProvider for ImageService {
    #[instrument(skip(self), fields(city = %city))]
    async fn hero_image(&self, city: &CityName) -> ImageRecord {
        let query = format!("{city} city skyline architecture");
        self.resolve(city.as_str(), &query, HERO_SIZE).await
    }

    #[instrument(skip(self))]
    async fn landmark_image(&self, landmark: &str) -> ImageRecord {
        let query = format!("{landmark} landmark architecture");
        self.resolve(landmark, &query, LANDMARK_SIZE).await
    }
}

#[cfg(test)]
mod tests {
    use domain::{ImageSource, Photographer};

    use super::*;
    use crate::error::ApplicationError;
    use crate::ports::{MockPhotoSearchPort, PhotoMatch};

    fn photographer() -> Photographer {
        Photographer {
            name: "Jane Doe".to_string(),
            username: "janedoe".to_string(),
            url: "https://unsplash.com/@janedoe".to_string(),
        }
    }

    fn service(mock: MockPhotoSearchPort) -> ImageService {
        ImageService::new(Arc::new(mock), "/image-placeholder")
    }

    fn rome() -> CityName {
        CityName::new("Rome").unwrap()
    }

    #[tokio::test]
    async fn hero_uses_found_photo() {
        let mut mock = MockPhotoSearchPort::new();
        mock.expect_is_configured().return_const(true);
        mock.expect_find_photo()
            .withf(|q| q == "Rome city skyline architecture")
            .returning(|_| {
                Ok(Some(PhotoMatch {
                    url: "https://images.unsplash.com/photo-1".to_string(),
                    alt: Some("Colosseum at dusk".to_string()),
                    photographer: photographer(),
                }))
            });

        let image = service(mock).hero_image(&rome()).await;

        assert_eq!(image.generated_by, ImageSource::Unsplash);
        assert_eq!(image.alt, "Colosseum at dusk");
        assert_eq!(image.photographer, Some(photographer()));
    }

    #[tokio::test]
    async fn photo_without_alt_gets_view_of() {
        let mut mock = MockPhotoSearchPort::new();
        mock.expect_is_configured().return_const(true);
        mock.expect_find_photo().returning(|_| {
            Ok(Some(PhotoMatch {
                url: "https://images.unsplash.com/photo-2".to_string(),
                alt: None,
                photographer: photographer(),
            }))
        });

        let image = service(mock).hero_image(&rome()).await;
        assert_eq!(image.alt, "View of Rome");
    }

    #[tokio::test]
    async fn unconfigured_search_skips_network_and_uses_placeholder() {
        let mut mock = MockPhotoSearchPort::new();
        mock.expect_is_configured().return_const(false);
        mock.expect_find_photo().never();

        let image = service(mock).hero_image(&rome()).await;

        assert!(image.is_placeholder());
        assert_eq!(
            image.url,
            "/image-placeholder?width=1200&height=800&text=Rome&bg=26f4b5"
        );
        assert_eq!(image.alt, "View of Rome");
        assert!(image.photographer.is_none());
    }

    #[tokio::test]
    async fn search_error_falls_back() {
        let mut mock = MockPhotoSearchPort::new();
        mock.expect_is_configured().return_const(true);
        mock.expect_find_photo()
            .returning(|_| Err(ApplicationError::ExternalService("HTTP 503".into())));

        let image = service(mock).hero_image(&rome()).await;
        assert!(image.is_placeholder());
    }

    #[tokio::test]
    async fn landmark_placeholder_is_smaller_and_encoded() {
        let mut mock = MockPhotoSearchPort::new();
        mock.expect_is_configured().return_const(true);
        mock.expect_find_photo()
            .withf(|q| q == "Eiffel Tower landmark architecture")
            .returning(|_| Ok(None));

        let image = service(mock).landmark_image("Eiffel Tower").await;

        assert_eq!(
            image.url,
            "/image-placeholder?width=800&height=600&text=Eiffel%20Tower&bg=1159ce"
        );
        assert_eq!(image.alt, "View of Eiffel Tower");
    }

    #[test]
    fn placeholder_colour_is_stable() {
        let mut mock = MockPhotoSearchPort::new();
        mock.expect_is_configured().return_const(false);
        let svc = service(mock);

        assert_eq!(
            svc.placeholder_url("Paris", HERO_SIZE),
            svc.placeholder_url("Paris", HERO_SIZE)
        );
        assert!(svc.placeholder_url("Paris", HERO_SIZE).ends_with("bg=495296"));
    }
}
