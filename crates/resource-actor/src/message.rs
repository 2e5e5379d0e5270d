//! # Generic Messages
//!
//! Message types exchanged between `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a `ResourceActor`.
///
/// # Resource-Oriented Architecture
/// Rather than ad-hoc messages per operation, every record family shares the same set:
///
/// - **Create**: builds a record from [`ActorEntity::Create`], assigns its ID and appends it.
///   Responds with the stored record.
/// - **Get**: fetches one record by ID (`None` when absent).
/// - **List**: every record, in insertion order.
/// - **Update**: merges an [`ActorEntity::Update`] into an existing record and responds with
///   the result, or `NotFound`.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
}
