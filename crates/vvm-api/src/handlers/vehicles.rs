//! Vehicle view-model handlers

use axum::extract::{Path, State};
use axum::Json;
use vvm_core::Vehicle;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /vehicles/{vin}
///
/// Assemble and return the view-model record for one vehicle. The response
/// is always a complete record, possibly with degraded picture/range fields;
/// an error status is returned only when the basic-data lookup fails.
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(vin): Path<String>,
) -> Result<Json<Vehicle>, ApiError> {
    let vehicle = state.aggregator().assemble(&vin).await?;
    Ok(Json(vehicle))
}
