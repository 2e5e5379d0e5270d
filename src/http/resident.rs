use axum::{extract::State, Json};
use tracing::error;

use super::{ApiError, AppState};
use crate::model::ResidentData;

/// Always 200 on success: an unconfigured resident reads as the default profile.
pub async fn get_resident(State(state): State<AppState>) -> Result<Json<ResidentData>, ApiError> {
    state.resident.current().await.map(Json).map_err(|e| {
        error!(error = %e, "Failed to load resident");
        ApiError::Internal("Failed to fetch resident data")
    })
}
