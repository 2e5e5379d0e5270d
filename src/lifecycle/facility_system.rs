use crate::clients::{ActivityClient, BookingClient, MoveClient, ResidentClient, TicketClient};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Failure while stopping the actors.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(#[from] tokio::task::JoinError),
}

/// The runtime orchestrator for the facility actors: the process-wide store.
///
/// `FacilitySystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping every actor
/// - **Dependency Wiring**: handing the activity feed's client to the actors that log to it
///
/// # Architecture
///
/// - **Activity Actor**: the feed (no dependencies)
/// - **Resident Actor**: the profile singleton (no dependencies)
/// - **Maintenance / Booking / Move Actors**: each holds an `ActivityClient` in its context
///
/// # Example
///
/// ```rust
/// use facility_desk::lifecycle::FacilitySystem;
/// use facility_desk::model::TicketCreate;
/// use resource_actor::ActorClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = FacilitySystem::new(16);
///
///     system.ticket_client.create_ticket(TicketCreate::new("Hallway light out")).await?;
///     assert_eq!(system.activity_client.list().await?.len(), 1);
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct FacilitySystem {
    pub ticket_client: TicketClient,
    pub booking_client: BookingClient,
    pub move_client: MoveClient,
    pub activity_client: ActivityClient,
    pub resident_client: ResidentClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl FacilitySystem {
    /// Spawns every actor with a channel capacity of `buffer_size`.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(buffer_size: usize) -> Self {
        // 1. Create actors (no dependencies)
        let (activity_actor, activity_client) = crate::activity_actor::new(buffer_size);
        let (resident_actor, resident_client) = crate::resident_actor::new(buffer_size);
        let (ticket_actor, ticket_client) = crate::maintenance_actor::new(buffer_size);
        let (booking_actor, booking_client) = crate::booking_actor::new(buffer_size);
        let (move_actor, move_client) = crate::move_actor::new(buffer_size);

        // 2. Start actors with injected context
        let handles = vec![
            tokio::spawn(activity_actor.run(())),
            tokio::spawn(resident_actor.run(())),
            tokio::spawn(ticket_actor.run(activity_client.clone())),
            tokio::spawn(booking_actor.run(activity_client.clone())),
            tokio::spawn(move_actor.run(activity_client.clone())),
        ];

        Self {
            ticket_client,
            booking_client,
            move_client,
            activity_client,
            resident_client,
            handles,
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the actors' channels; each actor drains what is queued and
    /// exits. The activity actor exits last, once the actors holding its client have stopped.
    /// Clones handed out earlier (to the HTTP router, say) must be dropped first or this waits
    /// for them.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.ticket_client);
        drop(self.booking_client);
        drop(self.move_client);
        drop(self.activity_client);
        drop(self.resident_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
