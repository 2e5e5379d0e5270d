use crate::model::{MoveRequest, MoveRequestCreate, MoveRequestId, MoveRequestUpdate};
use crate::move_actor::MoveRequestError;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the move-request actor.
#[derive(Clone)]
pub struct MoveClient {
    inner: ResourceClient<MoveRequest>,
}

impl MoveClient {
    pub fn new(inner: ResourceClient<MoveRequest>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_move_request(
        &self,
        params: MoveRequestCreate,
    ) -> Result<MoveRequest, MoveRequestError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_move_request(
        &self,
        id: MoveRequestId,
        update: MoveRequestUpdate,
    ) -> Result<MoveRequest, MoveRequestError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<MoveRequest> for MoveClient {
    type Error = MoveRequestError;

    fn inner(&self) -> &ResourceClient<MoveRequest> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match super::recover::<MoveRequestError>(e) {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => MoveRequestError::NotFound(id),
            Err(other) => MoveRequestError::ActorCommunicationError(other.to_string()),
        }
    }
}
