//! Entity trait implementation for [`MoveRequest`].

use super::MoveRequestError;
use crate::clients::ActivityClient;
use crate::model::{first_error, MoveRequest, MoveRequestCreate, MoveRequestId, MoveRequestUpdate};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::ActorEntity;
use tracing::warn;

#[async_trait]
impl ActorEntity for MoveRequest {
    type Id = MoveRequestId;
    type Create = MoveRequestCreate;
    type Update = MoveRequestUpdate;
    type Context = ActivityClient;
    type Error = MoveRequestError;

    fn from_create_params(
        id: MoveRequestId,
        params: MoveRequestCreate,
    ) -> Result<Self, Self::Error> {
        if let Some(msg) = first_error(&params.field_errors()) {
            return Err(MoveRequestError::ValidationError(msg));
        }
        Ok(Self {
            id,
            kind: params.kind,
            scheduled_date: params.scheduled_date,
            requester: params.requester.trim().to_string(),
            status: params.status.unwrap_or_default(),
            notes: params.notes.filter(|n| !n.trim().is_empty()),
            created_at: Utc::now(),
        })
    }

    async fn on_create(&mut self, activity: &ActivityClient) -> Result<(), Self::Error> {
        let line = format!(
            "{} scheduled for {} by {}",
            self.kind, self.scheduled_date, self.requester
        );
        if let Err(e) = activity.record(line).await {
            warn!(move_request_id = %self.id, error = %e, "Failed to record activity");
        }
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: MoveRequestUpdate,
        _activity: &ActivityClient,
    ) -> Result<(), Self::Error> {
        if let Some(date) = update.scheduled_date {
            self.scheduled_date = date;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(notes) = update.notes {
            self.notes = Some(notes);
        }
        Ok(())
    }
}
