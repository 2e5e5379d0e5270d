use crate::activity_actor::ActivityError;
use crate::model::{ActivityCreate, ActivityItem};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for the activity feed. Cloned into the context of every actor that logs activity.
#[derive(Clone)]
pub struct ActivityClient {
    inner: ResourceClient<ActivityItem>,
}

impl ActivityClient {
    pub fn new(inner: ResourceClient<ActivityItem>) -> Self {
        Self { inner }
    }

    /// Appends a line stamped with the current time.
    #[instrument(skip(self, description))]
    pub async fn record(
        &self,
        description: impl Into<String> + Send,
    ) -> Result<ActivityItem, ActivityError> {
        self.create_item(ActivityCreate::new(description)).await
    }

    #[instrument(skip(self))]
    pub async fn create_item(&self, params: ActivityCreate) -> Result<ActivityItem, ActivityError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<ActivityItem> for ActivityClient {
    type Error = ActivityError;

    fn inner(&self) -> &ResourceClient<ActivityItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match super::recover::<ActivityError>(e) {
            Ok(err) => err,
            Err(other) => ActivityError::ActorCommunicationError(other.to_string()),
        }
    }
}
