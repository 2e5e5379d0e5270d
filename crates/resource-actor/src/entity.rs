//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract every record family (tickets, bookings, move
//! requests, ...) implements to be owned by the generic `ResourceActor`. It names the
//! identifier, the create/update DTOs, the injected context and the error type, and provides
//! the lifecycle hooks (`on_create`, `on_update`).
//!
//! # Architecture Note
//! The actor loop is written once against this trait. A `Ticket` entity requires a
//! `TicketCreate` payload and cannot be sent a `BookingCreate`; the associated types make that
//! a compile error.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`] defaults to `Ok(())`.
//!
//! [`ActorEntity::on_update`] must be implemented. Record families that are read-only over
//! the API can use [`std::convert::Infallible`] as their `Update` type.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be managed by a `ResourceActor`.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks can await other actors. The `Context` type is
/// injected into every hook when the actor is started ("late binding"), which lets a ticket
/// actor hold a client for the activity feed without the two being built in a fixed order.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Built from the actor's sequential counter, so it must be convertible from `u32`.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The partial field set applied by an update.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One error enum per actor rather than one per operation. Clients match on a single type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the assigned ID and the create payload.
    /// Validation of required fields belongs here; an error rejects the create and the
    /// counter value is not reused.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after the entity is constructed and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Merge an update into the entity.
    ///
    /// The actor calls this on a copy and only commits the copy when it returns `Ok`, so an
    /// implementation may bail out half way without leaving a partially updated record.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;
}
