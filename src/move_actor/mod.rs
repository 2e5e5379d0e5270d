//! # Move Actor
//!
//! Owns move-in / move-out requests.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::MoveClient;
use crate::model::MoveRequest;
use resource_actor::ResourceActor;

/// Creates a new move-request actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<MoveRequest>, MoveClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, MoveClient::new(generic_client))
}
