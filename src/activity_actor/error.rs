//! Error types for the activity actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ActivityError {
    #[error("Activity validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ActivityError {
    fn from(msg: String) -> Self {
        ActivityError::ActorCommunicationError(msg)
    }
}
