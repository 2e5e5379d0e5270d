//! Error types for the booking actor.

use thiserror::Error;

/// Errors that can occur during booking operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookingError {
    #[error("Booking not found: {0}")]
    NotFound(String),

    #[error("Booking validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for BookingError {
    fn from(msg: String) -> Self {
        BookingError::ActorCommunicationError(msg)
    }
}
