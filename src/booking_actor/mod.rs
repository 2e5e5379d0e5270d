//! # Booking Actor
//!
//! Owns facility bookings. Bookings are created and listed over HTTP; rescheduling and status
//! changes go through [`BookingClient::update_booking`](crate::clients::BookingClient::update_booking).
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`FacilityBooking`]
//! - [`error`] - [`BookingError`]

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::BookingClient;
use crate::model::FacilityBooking;
use resource_actor::ResourceActor;

/// Creates a new booking actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<FacilityBooking>, BookingClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, BookingClient::new(generic_client))
}
