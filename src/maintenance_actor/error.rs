//! Error types for the maintenance actor.

use thiserror::Error;

/// Errors that can occur during ticket operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TicketError {
    /// The requested ticket was not found.
    #[error("Ticket not found: {0}")]
    NotFound(String),

    /// The ticket data provided is invalid.
    #[error("Ticket validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for TicketError {
    fn from(msg: String) -> Self {
        TicketError::ActorCommunicationError(msg)
    }
}
