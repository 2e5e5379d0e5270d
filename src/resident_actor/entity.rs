use super::ResidentError;
use crate::model::{first_error, initials_for, ResidentCreate, ResidentData, ResidentId};
use async_trait::async_trait;
use resource_actor::ActorEntity;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for ResidentData {
    type Id = ResidentId;
    type Create = ResidentCreate;
    type Update = Infallible;
    type Context = ();
    type Error = ResidentError;

    /// Missing or blank initials are derived from the name.
    fn from_create_params(id: ResidentId, params: ResidentCreate) -> Result<Self, Self::Error> {
        if let Some(msg) = first_error(&params.field_errors()) {
            return Err(ResidentError::ValidationError(msg));
        }
        let name = params.name.trim().to_string();
        let initials = match params.initials {
            Some(initials) if !initials.trim().is_empty() => initials.trim().to_string(),
            _ => initials_for(&name),
        };
        Ok(Self {
            id,
            name,
            unit: params.unit.trim().to_string(),
            initials,
        })
    }

    async fn on_update(&mut self, update: Infallible, _: &()) -> Result<(), Self::Error> {
        match update {}
    }
}
