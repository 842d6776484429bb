//! Photo search port
//!
//! Finds a single landscape photo for a free-text query.

use async_trait::async_trait;
use domain::Photographer;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// A photo returned by search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoMatch {
    /// Display-resolution URL
    pub url: String,
    /// Alternative text, when the photo has one
    pub alt: Option<String>,
    pub photographer: Photographer,
}

/// Port for photo search
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PhotoSearchPort: Send + Sync {
    /// Whether credentials for the search backend are present
    fn is_configured(&self) -> bool;

    /// Find the best landscape photo for `query`
    ///
    /// `Ok(None)` means the search ran and found nothing.
    async fn find_photo(&self, query: &str) -> Result<Option<PhotoMatch>, ApplicationError>;
}
