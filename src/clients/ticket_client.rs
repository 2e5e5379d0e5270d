//! # Ticket Client
//!
//! High-level API for the maintenance actor.
use crate::maintenance_actor::TicketError;
use crate::model::{MaintenanceTicket, TicketCreate, TicketId, TicketUpdate};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the maintenance actor.
#[derive(Clone)]
pub struct TicketClient {
    inner: ResourceClient<MaintenanceTicket>,
}

impl TicketClient {
    pub fn new(inner: ResourceClient<MaintenanceTicket>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_ticket(
        &self,
        params: TicketCreate,
    ) -> Result<MaintenanceTicket, TicketError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Merges `update` into the ticket. Unknown IDs come back as [`TicketError::NotFound`].
    #[instrument(skip(self))]
    pub async fn update_ticket(
        &self,
        id: TicketId,
        update: TicketUpdate,
    ) -> Result<MaintenanceTicket, TicketError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<MaintenanceTicket> for TicketClient {
    type Error = TicketError;

    fn inner(&self) -> &ResourceClient<MaintenanceTicket> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match super::recover::<TicketError>(e) {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => TicketError::NotFound(id),
            Err(other) => TicketError::ActorCommunicationError(other.to_string()),
        }
    }
}
