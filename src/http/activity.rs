use axum::{extract::State, Json};
use resource_actor::ActorClient;
use tracing::error;

use super::{ApiError, AppState};
use crate::model::ActivityItem;

pub async fn list_activity(
    State(state): State<AppState>,
) -> Result<Json<Vec<ActivityItem>>, ApiError> {
    state.activity.list().await.map(Json).map_err(|e| {
        error!(error = %e, "Failed to list activity");
        ApiError::Internal("Failed to fetch activity")
    })
}
