//! Type-safe wrappers around [`ResourceClient`](resource_actor::ResourceClient).
//!
//! Each wrapper gets `get` and `list` from [`ActorClient`](resource_actor::ActorClient) and adds
//! the domain methods. Errors come back as the resource's own enum: a validation failure raised
//! inside the actor is recovered as-is, `NotFound` keeps its meaning, and anything else becomes
//! `ActorCommunicationError`.

pub mod activity_client;
pub mod booking_client;
pub mod move_client;
pub mod resident_client;
pub mod ticket_client;

pub use activity_client::*;
pub use booking_client::*;
pub use move_client::*;
pub use resident_client::*;
pub use ticket_client::*;

use resource_actor::FrameworkError;

/// Pulls the entity's own error back out of `FrameworkError::EntityError`, or hands the
/// framework error back unchanged.
pub(crate) fn recover<E>(e: FrameworkError) -> Result<E, FrameworkError>
where
    E: std::error::Error + Send + Sync + 'static,
{
    match e {
        FrameworkError::EntityError(inner) => inner
            .downcast::<E>()
            .map(|err| *err)
            .map_err(FrameworkError::EntityError),
        other => Err(other),
    }
}
