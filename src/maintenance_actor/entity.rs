//! Entity trait implementation for [`MaintenanceTicket`].
//!
//! Tickets validate their description on create, log a line to the activity feed, and accept
//! partial updates through [`TicketUpdate`].

use super::TicketError;
use crate::clients::ActivityClient;
use crate::model::{first_error, is_blank, MaintenanceTicket, TicketCreate, TicketId, TicketUpdate};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::ActorEntity;
use tracing::warn;

#[async_trait]
impl ActorEntity for MaintenanceTicket {
    type Id = TicketId;
    type Create = TicketCreate;
    type Update = TicketUpdate;
    type Context = ActivityClient;
    type Error = TicketError;

    fn from_create_params(id: TicketId, params: TicketCreate) -> Result<Self, Self::Error> {
        if let Some(msg) = first_error(&params.field_errors()) {
            return Err(TicketError::ValidationError(msg));
        }
        Ok(Self {
            id,
            description: params.description.trim().to_string(),
            status: params.status.unwrap_or_default(),
            priority: params.priority.unwrap_or_default(),
            resident: params.resident,
            created_at: Utc::now(),
        })
    }

    /// Records the new ticket in the activity feed. A feed failure is logged and the ticket is
    /// still created.
    async fn on_create(&mut self, activity: &ActivityClient) -> Result<(), Self::Error> {
        let line = format!("Maintenance request submitted: {}", self.description);
        if let Err(e) = activity.record(line).await {
            warn!(ticket_id = %self.id, error = %e, "Failed to record activity");
        }
        Ok(())
    }

    /// Shallow merge. Fields left as `None` keep their current value.
    async fn on_update(
        &mut self,
        update: TicketUpdate,
        _activity: &ActivityClient,
    ) -> Result<(), Self::Error> {
        if let Some(description) = update.description {
            if is_blank(&description) {
                return Err(TicketError::ValidationError(
                    "description: Description is required".to_string(),
                ));
            }
            self.description = description.trim().to_string();
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(resident) = update.resident {
            self.resident = Some(resident);
        }
        Ok(())
    }
}
