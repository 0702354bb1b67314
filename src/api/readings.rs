//! Reading ingestion and retrieval endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::domain::ElectricityReading;
use crate::service::AppState;

use super::error::ApiError;

#[derive(Debug, Deserialize, Validate)]
pub struct StoreReadingsRequest {
    #[validate(length(min = 1, message = "smart_meter_id must not be empty"))]
    pub smart_meter_id: String,
    #[validate(length(min = 1, message = "electricity_readings must not be empty"))]
    pub electricity_readings: Vec<ElectricityReading>,
}

/// POST /readings/store - append readings for a meter
pub async fn store_readings(
    State(st): State<AppState>,
    Json(req): Json<StoreReadingsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    req.validate()?;
    st.readings.store(&req.smart_meter_id, req.electricity_readings);
    Ok(StatusCode::CREATED)
}

/// GET /readings/read/{smart_meter_id} - the stored series
///
/// A known meter with no readings yet returns an empty array; an unknown
/// meter is a 404.
pub async fn read_readings(
    State(st): State<AppState>,
    Path(smart_meter_id): Path<String>,
) -> Result<Json<Vec<ElectricityReading>>, ApiError> {
    st.readings
        .get(&smart_meter_id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("smart meter {smart_meter_id}")))
}
