use crate::model::{ResidentCreate, ResidentData};
use crate::resident_actor::ResidentError;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for the resident profile.
#[derive(Clone)]
pub struct ResidentClient {
    inner: ResourceClient<ResidentData>,
}

impl ResidentClient {
    pub fn new(inner: ResourceClient<ResidentData>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_resident(
        &self,
        params: ResidentCreate,
    ) -> Result<ResidentData, ResidentError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// The configured profile, or the default one when none has been stored.
    #[instrument(skip(self))]
    pub async fn current(&self) -> Result<ResidentData, ResidentError> {
        let residents = self.list().await?;
        Ok(residents.into_iter().next().unwrap_or_default())
    }
}

#[async_trait]
impl ActorClient<ResidentData> for ResidentClient {
    type Error = ResidentError;

    fn inner(&self) -> &ResourceClient<ResidentData> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match super::recover::<ResidentError>(e) {
            Ok(err) => err,
            Err(other) => ResidentError::ActorCommunicationError(other.to_string()),
        }
    }
}
