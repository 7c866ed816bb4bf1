use crate::error::CatalogError;
use crate::model::{Director, DirectorCreate, DirectorId, DirectorUpdate, NameFilter, Person};
use async_trait::async_trait;
use resource_framework::Resource;

#[async_trait]
impl Resource for Director {
    type Id = DirectorId;
    type Create = DirectorCreate;
    type Update = DirectorUpdate;
    type Filter = NameFilter;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = CatalogError;

    fn from_create_params(id: DirectorId, params: DirectorCreate) -> Result<Self, Self::Error> {
        Director::new(id, params)
    }

    fn matches(&self, filter: &NameFilter) -> bool {
        filter.matches(self.profile.name())
    }

    async fn on_create(&mut self, _ctx: &()) -> Result<(), Self::Error> {
        self.check()
    }

    async fn on_update(&mut self, update: DirectorUpdate, _ctx: &()) -> Result<(), Self::Error> {
        self.profile = update.profile;
        self.set_style(update.style.as_deref());
        self.check()
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}
