use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use resource_actor::ActorClient;
use tracing::{error, warn};

use super::{ApiError, AppState};
use crate::model::{BookingCreate, FacilityBooking};

pub async fn list_bookings(
    State(state): State<AppState>,
) -> Result<Json<Vec<FacilityBooking>>, ApiError> {
    state.bookings.list().await.map(Json).map_err(|e| {
        error!(error = %e, "Failed to list bookings");
        ApiError::Internal("Failed to fetch bookings")
    })
}

pub async fn create_booking(
    State(state): State<AppState>,
    payload: Result<Json<BookingCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<FacilityBooking>), ApiError> {
    let Json(params) = payload.map_err(|e| {
        warn!(error = %e, "Malformed booking payload");
        ApiError::Internal("Failed to create booking")
    })?;

    let booking = state.bookings.create_booking(params).await.map_err(|e| {
        warn!(error = %e, "Failed to create booking");
        ApiError::Internal("Failed to create booking")
    })?;
    Ok((StatusCode::CREATED, Json(booking)))
}
