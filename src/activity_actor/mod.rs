//! # Activity Actor
//!
//! The append-only activity feed. Nothing updates an entry once written, so the update type is
//! [`Infallible`](std::convert::Infallible). The other actors hold an
//! [`ActivityClient`](crate::clients::ActivityClient) in their context and append to it from
//! `on_create`.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ActivityClient;
use crate::model::ActivityItem;
use resource_actor::ResourceActor;

/// Creates a new activity actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<ActivityItem>, ActivityClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ActivityClient::new(generic_client))
}
