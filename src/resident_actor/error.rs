//! Error types for the resident actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ResidentError {
    #[error("Resident validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ResidentError {
    fn from(msg: String) -> Self {
        ResidentError::ActorCommunicationError(msg)
    }
}
