use super::ActivityError;
use crate::model::{first_error, ActivityCreate, ActivityId, ActivityItem};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::ActorEntity;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for ActivityItem {
    type Id = ActivityId;
    type Create = ActivityCreate;
    type Update = Infallible;
    type Context = ();
    type Error = ActivityError;

    fn from_create_params(id: ActivityId, params: ActivityCreate) -> Result<Self, Self::Error> {
        if let Some(msg) = first_error(&params.field_errors()) {
            return Err(ActivityError::ValidationError(msg));
        }
        Ok(Self {
            id,
            description: params.description.trim().to_string(),
            timestamp: params.timestamp.unwrap_or_else(Utc::now),
        })
    }

    async fn on_update(&mut self, update: Infallible, _: &()) -> Result<(), Self::Error> {
        match update {}
    }
}
