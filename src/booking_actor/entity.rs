//! Entity trait implementation for [`FacilityBooking`].

use super::BookingError;
use crate::clients::ActivityClient;
use crate::model::{first_error, BookingCreate, BookingId, BookingUpdate, FacilityBooking};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::ActorEntity;
use tracing::warn;

#[async_trait]
impl ActorEntity for FacilityBooking {
    type Id = BookingId;
    type Create = BookingCreate;
    type Update = BookingUpdate;
    type Context = ActivityClient;
    type Error = BookingError;

    fn from_create_params(id: BookingId, params: BookingCreate) -> Result<Self, Self::Error> {
        if let Some(msg) = first_error(&params.field_errors()) {
            return Err(BookingError::ValidationError(msg));
        }
        Ok(Self {
            id,
            facility: params.facility.trim().to_string(),
            starts_at: params.starts_at,
            ends_at: params.ends_at,
            requester: params.requester.trim().to_string(),
            status: params.status.unwrap_or_default(),
            created_at: Utc::now(),
        })
    }

    async fn on_create(&mut self, activity: &ActivityClient) -> Result<(), Self::Error> {
        let line = format!(
            "{} booked by {} for {}",
            self.facility,
            self.requester,
            self.starts_at.format("%b %-d, %H:%M")
        );
        if let Err(e) = activity.record(line).await {
            warn!(booking_id = %self.id, error = %e, "Failed to record activity");
        }
        Ok(())
    }

    /// Applies a reschedule or status change. The resulting window must still end after it
    /// starts.
    async fn on_update(
        &mut self,
        update: BookingUpdate,
        _activity: &ActivityClient,
    ) -> Result<(), Self::Error> {
        if let Some(starts_at) = update.starts_at {
            self.starts_at = starts_at;
        }
        if let Some(ends_at) = update.ends_at {
            self.ends_at = ends_at;
        }
        if self.ends_at <= self.starts_at {
            return Err(BookingError::ValidationError(
                "endsAt: End time must be after start time".to_string(),
            ));
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        Ok(())
    }
}
