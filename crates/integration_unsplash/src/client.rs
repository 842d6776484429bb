//! Unsplash API client

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, instrument};

use crate::{
    config::UnsplashConfig,
    error::PhotoSearchError,
    models::{Orientation, Photo},
    provider::PhotoSearchProvider,
};

/// Unsplash API response structures
mod api {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct SearchResponse {
        #[serde(default)]
        pub results: Vec<PhotoResult>,
    }

    #[derive(Debug, Deserialize)]
    pub struct PhotoResult {
        pub id: String,
        pub urls: Urls,
        pub alt_description: Option<String>,
        pub user: User,
    }

    #[derive(Debug, Deserialize)]
    pub struct Urls {
        pub regular: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct User {
        pub name: String,
        pub username: String,
        pub links: UserLinks,
    }

    #[derive(Debug, Deserialize)]
    pub struct UserLinks {
        pub html: String,
    }
}

/// Unsplash search API client
pub struct UnsplashClient {
    client: Client,
    access_key: String,
    base_url: String,
    timeout_secs: u64,
}

impl std::fmt::Debug for UnsplashClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnsplashClient")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish_non_exhaustive()
    }
}

impl UnsplashClient {
    /// Create a new Unsplash client
    ///
    /// # Errors
    ///
    /// Returns an error if the access key is missing or the HTTP client
    /// cannot be created.
    pub fn new(config: &UnsplashConfig) -> Result<Self, PhotoSearchError> {
        let access_key = config
            .access_key_str()
            .ok_or_else(|| {
                PhotoSearchError::ConfigurationError("Unsplash access key is required".to_string())
            })?
            .to_string();

        config
            .validate()
            .map_err(PhotoSearchError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PhotoSearchError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            access_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_secs: config.timeout_secs,
        })
    }

    fn search_url(&self) -> String {
        format!("{}/search/photos", self.base_url)
    }

    fn convert(result: api::PhotoResult) -> Photo {
        Photo {
            id: result.id,
            url: result.urls.regular,
            alt_description: result.alt_description.filter(|a| !a.trim().is_empty()),
            photographer_name: result.user.name,
            photographer_username: result.user.username,
            photographer_url: result.user.links.html,
        }
    }

    fn status_error(status: StatusCode, body: &str) -> PhotoSearchError {
        match status {
            StatusCode::TOO_MANY_REQUESTS => PhotoSearchError::RateLimitExceeded,
            // Unsplash reports an exhausted quota as 403 with a plain-text body
            StatusCode::FORBIDDEN if body.contains("Rate Limit") => {
                PhotoSearchError::RateLimitExceeded
            },
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                PhotoSearchError::AuthenticationFailed("Invalid Unsplash access key".to_string())
            },
            _ => PhotoSearchError::RequestFailed(format!("HTTP {status}: {body}")),
        }
    }
}

#[async_trait]
impl PhotoSearchProvider for UnsplashClient {
    #[instrument(skip(self), fields(provider = "unsplash"))]
    async fn search_photo(
        &self,
        query: &str,
        orientation: Orientation,
    ) -> Result<Photo, PhotoSearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(PhotoSearchError::InvalidQuery(
                "Search query cannot be empty".to_string(),
            ));
        }

        let url = self.search_url();
        debug!(url = %url, query = %query, "Sending Unsplash search request");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("query", query),
                ("per_page", "1"),
                ("orientation", orientation.as_str()),
            ])
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .header("Accept-Version", "v1")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PhotoSearchError::Timeout {
                        timeout_secs: self.timeout_secs,
                    }
                } else if e.is_connect() {
                    PhotoSearchError::ConnectionFailed(e.to_string())
                } else {
                    PhotoSearchError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        debug!(status = %status, "Received Unsplash response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, &body));
        }

        let api_response: api::SearchResponse = response
            .json()
            .await
            .map_err(|e| PhotoSearchError::ParseError(e.to_string()))?;

        api_response
            .results
            .into_iter()
            .next()
            .map(Self::convert)
            .ok_or_else(|| PhotoSearchError::NoResults {
                query: query.to_string(),
            })
    }
}
