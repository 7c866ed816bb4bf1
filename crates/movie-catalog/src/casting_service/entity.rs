use crate::clients::{ActorClient, MovieClient};
use crate::error::CatalogError;
use crate::model::{Casting, CastingCreate, CastingFilter, CastingId, CastingUpdate};
use async_trait::async_trait;
use resource_framework::{Resource, ServiceClient};

#[async_trait]
impl Resource for Casting {
    type Id = CastingId;
    type Create = CastingCreate;
    type Update = CastingUpdate;
    type Filter = CastingFilter;
    type Action = ();
    type ActionResult = ();
    type Context = (MovieClient, ActorClient);
    type Error = CatalogError;

    fn from_create_params(id: CastingId, params: CastingCreate) -> Result<Self, Self::Error> {
        Ok(Casting::new(id, params))
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.pair_key())
    }

    fn matches(&self, filter: &CastingFilter) -> bool {
        self.matches_filter(filter)
    }

    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), Self::Error> {
        let (movies, actors) = ctx;
        if movies.find_by_id(self.movie_id).await?.is_none() {
            return Err(CatalogError::not_found("Movie", self.movie_id));
        }
        if actors.find_by_id(self.actor_id).await?.is_none() {
            return Err(CatalogError::not_found("Actor", self.actor_id));
        }
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: CastingUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        self.set_character(update.character.as_deref());
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
