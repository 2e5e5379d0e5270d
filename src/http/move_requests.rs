use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use resource_actor::ActorClient;
use tracing::{error, warn};

use super::{ApiError, AppState};
use crate::model::{MoveRequest, MoveRequestCreate};

pub async fn list_move_requests(
    State(state): State<AppState>,
) -> Result<Json<Vec<MoveRequest>>, ApiError> {
    state.moves.list().await.map(Json).map_err(|e| {
        error!(error = %e, "Failed to list move requests");
        ApiError::Internal("Failed to fetch move requests")
    })
}

pub async fn create_move_request(
    State(state): State<AppState>,
    payload: Result<Json<MoveRequestCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<MoveRequest>), ApiError> {
    let Json(params) = payload.map_err(|e| {
        warn!(error = %e, "Malformed move request payload");
        ApiError::Internal("Failed to create move request")
    })?;

    let request = state.moves.create_move_request(params).await.map_err(|e| {
        warn!(error = %e, "Failed to create move request");
        ApiError::Internal("Failed to create move request")
    })?;
    Ok((StatusCode::CREATED, Json(request)))
}
