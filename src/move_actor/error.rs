//! Error types for the move-request actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum MoveRequestError {
    #[error("Move request not found: {0}")]
    NotFound(String),

    #[error("Move request validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for MoveRequestError {
    fn from(msg: String) -> Self {
        MoveRequestError::ActorCommunicationError(msg)
    }
}
