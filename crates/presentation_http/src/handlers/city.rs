//! `GET /city-history`

use axum::{
    Json,
    extract::{Query, State},
};
use domain::{CityName, CityOverview};
use serde::Serialize;
use tracing::instrument;

use super::first_value;
use crate::{error::ApiError, state::AppState};

/// Success envelope
#[derive(Debug, Serialize)]
pub struct CityHistoryResponse {
    pub success: bool,
    pub data: CityOverview,
}

/// Aggregate history, hero image and weather for a city
///
/// The name is validated before any provider runs. A repeated `city`
/// parameter resolves to its first value.
#[instrument(skip_all)]
pub async fn city_history(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Json<CityHistoryResponse>, ApiError> {
    let city = CityName::from_query(first_value(&query, "city"))?;
    let data = state.city_history.overview(&city).await?;

    Ok(Json(CityHistoryResponse {
        success: true,
        data,
    }))
}
