//! # Resource Actor
//!
//! Building blocks for keeping record collections behind actors. Each record family (tickets,
//! bookings, move requests, ...) lives in its own [`ResourceActor`], a Tokio task that owns an
//! insertion-ordered store and serves requests one at a time. Callers talk to it through a
//! cloneable [`ResourceClient`].
//!
//! ## Why Actors?
//!
//! - Isolated state (no shared memory, no locks)
//! - Message-passing concurrency
//! - Sequential processing within each actor, so concurrent updates to one record are applied
//!   in arrival order and never interleave
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model)
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - record shape, validation and hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and storage
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//!
//! The request set is deliberately small: `Create`, `Get`, `List` and `Update`. Records are
//! never deleted.
//!
//! ```rust
//! use resource_actor::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Booking {
//!     id: u32,
//!     facility: String,
//!     confirmed: bool,
//! }
//!
//! #[derive(Debug)] struct BookingCreate { facility: String }
//! #[derive(Debug)] struct BookingUpdate { confirmed: Option<bool> }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("facility is required")]
//! struct MissingFacility;
//!
//! #[async_trait]
//! impl ActorEntity for Booking {
//!     type Id = u32;
//!     type Create = BookingCreate;
//!     type Update = BookingUpdate;
//!     type Context = ();
//!     type Error = MissingFacility;
//!
//!     fn from_create_params(id: u32, params: BookingCreate) -> Result<Self, Self::Error> {
//!         if params.facility.trim().is_empty() {
//!             return Err(MissingFacility);
//!         }
//!         Ok(Self { id, facility: params.facility, confirmed: false })
//!     }
//!
//!     async fn on_update(&mut self, update: BookingUpdate, _: &()) -> Result<(), Self::Error> {
//!         if let Some(confirmed) = update.confirmed { self.confirmed = confirmed; }
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Booking>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let booking = client.create(BookingCreate { facility: "Gym".into() }).await.unwrap();
//!     let booking = client
//!         .update(booking.id, BookingUpdate { confirmed: Some(true) })
//!         .await
//!         .unwrap();
//!     assert!(booking.confirmed);
//!     assert!(client.create(BookingCreate { facility: " ".into() }).await.is_err());
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected when the actor is started via `run(context)`, not at
//! construction. A ticket actor can hold the activity feed's client and log from its
//! `on_create` hook:
//!
//! ```rust,ignore
//! let (activity_actor, activity_client) = ResourceActor::<ActivityItem>::new(32);
//! let (ticket_actor, ticket_client) = ResourceActor::<MaintenanceTicket>::new(32);
//!
//! tokio::spawn(activity_actor.run(()));
//! tokio::spawn(ticket_actor.run(ActivityClient::new(activity_client)));
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient<T>` from a queue of expectations, so
//! client wrappers and actors that depend on other actors can be tested without spawning the
//! dependency. See the [`mock`] module.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
