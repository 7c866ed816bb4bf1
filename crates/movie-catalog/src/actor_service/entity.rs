//! [`Resource`] implementation for [`Actor`].

use crate::error::CatalogError;
use crate::model::{Actor, ActorCreate, ActorId, ActorUpdate, NameFilter};
use async_trait::async_trait;
use resource_framework::Resource;

#[async_trait]
impl Resource for Actor {
    type Id = ActorId;
    type Create = ActorCreate;
    type Update = ActorUpdate;
    type Filter = NameFilter;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = CatalogError;

    fn from_create_params(id: ActorId, params: ActorCreate) -> Result<Self, Self::Error> {
        Actor::new(id, params)
    }

    fn matches(&self, filter: &NameFilter) -> bool {
        filter.matches(self.profile.name())
    }

    async fn on_update(&mut self, update: ActorUpdate, _ctx: &()) -> Result<(), Self::Error> {
        self.profile = update.profile;
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}
