//! Photo search provider trait

use async_trait::async_trait;

use crate::{Orientation, Photo, PhotoSearchError};

/// Trait for photo search backends
#[async_trait]
pub trait PhotoSearchProvider: Send + Sync {
    /// Return the best match for `query`
    ///
    /// # Errors
    ///
    /// Returns `PhotoSearchError::NoResults` when nothing matches and another
    /// variant when the request itself fails.
    async fn search_photo(
        &self,
        query: &str,
        orientation: Orientation,
    ) -> Result<Photo, PhotoSearchError>;
}
