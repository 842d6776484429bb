//! `GET /image-placeholder`

use axum::{
    extract::Query,
    http::header,
    response::{IntoResponse, Response},
};
use image_render::{PlaceholderParams, render_placeholder};
use tracing::{debug, instrument};

use super::first_value;
use crate::error::ApiError;

/// Rendered placeholders never change for the same query
pub const CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

/// Render a solid-colour JPEG with centred caption
///
/// Parsing and defaults happen in [`PlaceholderParams`].
#[instrument(skip_all)]
pub async fn image_placeholder(
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let params = PlaceholderParams::from_query(
        first_value(&query, "width"),
        first_value(&query, "height"),
        first_value(&query, "text"),
        first_value(&query, "bg"),
    );
    debug!(
        width = params.width(),
        height = params.height(),
        bg = %params.background(),
        "Rendering placeholder"
    );

    let bytes = tokio::task::spawn_blocking(move || render_placeholder(&params))
        .await
        .map_err(|e| ApiError::Internal(format!("Render task failed: {e}")))?
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/jpeg"),
            (header::CACHE_CONTROL, CACHE_CONTROL),
        ],
        bytes,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[tokio::test]
    async fn defaults_render_jpeg() {
        let response = image_placeholder(Query(Vec::new()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/jpeg");
        assert_eq!(response.headers()[header::CACHE_CONTROL], CACHE_CONTROL);
    }
}
