//! Unsplash photo adapter - Implements PhotoSearchPort

use application::{
    error::ApplicationError,
    ports::{PhotoMatch, PhotoSearchPort},
};
use async_trait::async_trait;
use domain::Photographer;
use integration_unsplash::{
    Orientation, Photo, PhotoSearchError, PhotoSearchProvider, UnsplashClient, UnsplashConfig,
};
use tracing::{debug, info, instrument};

/// Adapter for Unsplash photo search
///
/// Holds no client when the access key is missing.
#[derive(Debug)]
pub struct UnsplashPhotoAdapter {
    client: Option<UnsplashClient>,
}

impl UnsplashPhotoAdapter {
    /// Create the adapter, building a client only when a key is configured
    pub fn new(config: &UnsplashConfig) -> Result<Self, ApplicationError> {
        if config.access_key_str().is_none() {
            info!("Unsplash access key missing, photo search disabled");
            return Ok(Self { client: None });
        }

        let client = UnsplashClient::new(config).map_err(Self::map_error)?;
        Ok(Self {
            client: Some(client),
        })
    }

    fn map_error(e: PhotoSearchError) -> ApplicationError {
        match e {
            PhotoSearchError::RateLimitExceeded => ApplicationError::RateLimited,
            PhotoSearchError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
            other => ApplicationError::ExternalService(format!("Unsplash: {other}")),
        }
    }

    fn to_match(photo: Photo) -> PhotoMatch {
        PhotoMatch {
            url: photo.url,
            alt: photo.alt_description,
            photographer: Photographer {
                name: photo.photographer_name,
                username: photo.photographer_username,
                url: photo.photographer_url,
            },
        }
    }
}

#[async_trait]
impl PhotoSearchPort for UnsplashPhotoAdapter {
    fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    #[instrument(skip(self))]
    async fn find_photo(&self, query: &str) -> Result<Option<PhotoMatch>, ApplicationError> {
        let Some(client) = &self.client else {
            return Err(ApplicationError::Configuration(
                "UNSPLASH_ACCESS_KEY is not configured".to_string(),
            ));
        };

        match client.search_photo(query, Orientation::Landscape).await {
            Ok(photo) => {
                debug!(photo_id = %photo.id, "Unsplash match");
                Ok(Some(Self::to_match(photo)))
            },
            Err(e) if e.is_miss() => Ok(None),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}
