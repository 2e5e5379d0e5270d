use crate::booking_actor::BookingError;
use crate::model::{BookingCreate, BookingId, BookingUpdate, FacilityBooking};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the booking actor.
#[derive(Clone)]
pub struct BookingClient {
    inner: ResourceClient<FacilityBooking>,
}

impl BookingClient {
    pub fn new(inner: ResourceClient<FacilityBooking>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_booking(
        &self,
        params: BookingCreate,
    ) -> Result<FacilityBooking, BookingError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_booking(
        &self,
        id: BookingId,
        update: BookingUpdate,
    ) -> Result<FacilityBooking, BookingError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<FacilityBooking> for BookingClient {
    type Error = BookingError;

    fn inner(&self) -> &ResourceClient<FacilityBooking> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match super::recover::<BookingError>(e) {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => BookingError::NotFound(id),
            Err(other) => BookingError::ActorCommunicationError(other.to_string()),
        }
    }
}
