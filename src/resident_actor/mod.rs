//! # Resident Actor
//!
//! Holds the resident profile. The collection is used as a singleton: the first stored record
//! is "the" resident, and an empty collection reads as [`ResidentData::default`].

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ResidentClient;
use crate::model::ResidentData;
use resource_actor::ResourceActor;

/// Creates a new resident actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<ResidentData>, ResidentClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ResidentClient::new(generic_client))
}
