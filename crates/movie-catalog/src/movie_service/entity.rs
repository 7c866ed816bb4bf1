//! [`Resource`] implementation for [`Movie`].
//!
//! - `unique_key` is the lowercased name, so "Titanic" and "titanic" conflict.
//! - `on_create` and `AssignDirector` look the director up through the injected
//!   [`DirectorClient`].

use super::actions::{MovieAction, MovieActionResult};
use crate::clients::DirectorClient;
use crate::error::CatalogError;
use crate::model::{DirectorId, Movie, MovieCreate, MovieFilter, MovieId, MovieUpdate};
use async_trait::async_trait;
use resource_framework::{Resource, ServiceClient};
use tracing::debug;

async fn ensure_director(directors: &DirectorClient, id: DirectorId) -> Result<(), CatalogError> {
    match directors.find_by_id(id).await? {
        Some(_) => Ok(()),
        None => Err(CatalogError::not_found("Director", id)),
    }
}

#[async_trait]
impl Resource for Movie {
    type Id = MovieId;
    type Create = MovieCreate;
    type Update = MovieUpdate;
    type Filter = MovieFilter;
    type Action = MovieAction;
    type ActionResult = MovieActionResult;
    type Context = DirectorClient;
    type Error = CatalogError;

    fn from_create_params(id: MovieId, params: MovieCreate) -> Result<Self, Self::Error> {
        Movie::from_create(id, params)
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.name_key())
    }

    fn matches(&self, filter: &MovieFilter) -> bool {
        self.matches_filter(filter)
    }

    async fn on_create(&mut self, directors: &DirectorClient) -> Result<(), Self::Error> {
        if let Some(director) = self.director() {
            debug!(movie_id = %self.id, %director, "Checking director");
            ensure_director(directors, director).await?;
        }
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: MovieUpdate,
        _directors: &DirectorClient,
    ) -> Result<(), Self::Error> {
        self.apply(update)
    }

    async fn handle_action(
        &mut self,
        action: MovieAction,
        directors: &DirectorClient,
    ) -> Result<MovieActionResult, Self::Error> {
        match action {
            MovieAction::AssignDirector(director) => {
                if self.director() == Some(director) {
                    return Err(CatalogError::DuplicateAssociation(format!(
                        "{director} already directs {}",
                        self.id
                    )));
                }
                ensure_director(directors, director).await?;
                self.set_director(Some(director));
                Ok(MovieActionResult::AssignDirector(director))
            }
            MovieAction::ClearDirector => match self.director() {
                Some(previous) => {
                    self.set_director(None);
                    Ok(MovieActionResult::ClearDirector(previous))
                }
                None => Err(CatalogError::NotFound {
                    entity: "Director",
                    id: format!("none assigned to {}", self.id),
                }),
            },
        }
    }
}
