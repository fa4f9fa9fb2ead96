//! Catalog endpoints.

use ad_protocol::vehicle::VehicleRecord;
use axum::Json;
use axum::extract::{Path, State};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// GET /api/v1/cars: all cars in display order.
pub async fn list_cars(State(state): State<AppState>) -> ApiResult<Json<Vec<VehicleRecord>>> {
    Ok(Json(state.list_cars().await?))
}

/// GET /api/v1/cars/{slug}: one car.
pub async fn get_car(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<VehicleRecord>> {
    state
        .find_car(&slug)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("car '{slug}' not found")))
}
