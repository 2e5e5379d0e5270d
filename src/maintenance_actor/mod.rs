//! # Maintenance Actor
//!
//! Owns the maintenance tickets. The only resource with an update path over HTTP
//! (`PATCH /api/maintenance`).
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for
//!   [`MaintenanceTicket`]
//! - [`error`] - [`TicketError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The actor's context is an [`ActivityClient`](crate::clients::ActivityClient): every new
//! ticket appends a line to the activity feed.
//!
//! ```rust
//! use facility_desk::{activity_actor, maintenance_actor};
//! use facility_desk::model::TicketCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (activity, activity_client) = activity_actor::new(8);
//!     let (tickets, ticket_client) = maintenance_actor::new(8);
//!
//!     tokio::spawn(activity.run(()));
//!     tokio::spawn(tickets.run(activity_client));
//!
//!     let ticket = ticket_client.create_ticket(TicketCreate::new("Leaky faucet")).await?;
//!     assert_eq!(ticket.id.as_str(), "ticket_1");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::TicketClient;
use crate::model::MaintenanceTicket;
use resource_actor::ResourceActor;

/// Creates a new maintenance actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<MaintenanceTicket>, TicketClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, TicketClient::new(generic_client))
}
