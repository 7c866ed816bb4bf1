//! # Movie Client
//!
//! High-level API for the movie service, including the director actions and the
//! sorted listings.
use crate::error::CatalogError;
use crate::model::{DirectorId, Movie, MovieCreate, MovieFilter, MovieId, MovieUpdate};
use crate::movie_service::{MovieAction, MovieActionResult};
use async_trait::async_trait;
use resource_framework::{FrameworkError, ResourceClient, ServiceClient};
use tracing::{debug, instrument};

/// Client for interacting with the movie service.
#[derive(Clone)]
pub struct MovieClient {
    inner: ResourceClient<Movie>,
}

impl MovieClient {
    pub fn new(inner: ResourceClient<Movie>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ServiceClient<Movie> for MovieClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Movie> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CatalogError::from_framework("Movie", e)
    }
}

fn unexpected(result: MovieActionResult) -> CatalogError {
    CatalogError::Unavailable(format!("Movie service answered with {result:?}"))
}

impl MovieClient {
    /// Registers a movie. A name already used by another movie, ignoring case, is a
    /// [`CatalogError::Conflict`].
    #[instrument(skip(self))]
    pub async fn register_movie(&self, params: MovieCreate) -> Result<MovieId, CatalogError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Replaces the stored scalars with `movie`'s, matching by id. The director reference
    /// is left as stored.
    #[instrument(skip(self, movie), fields(movie_id = %movie.id))]
    pub async fn update_movie(&self, movie: &Movie) -> Result<Movie, CatalogError> {
        debug!("Sending request");
        self.inner
            .update(movie.id, MovieUpdate::from(movie))
            .await
            .map_err(Self::map_error)
    }

    async fn list_where(&self, filter: MovieFilter) -> Result<Vec<Movie>, CatalogError> {
        self.inner.list(Some(filter)).await.map_err(Self::map_error)
    }

    /// Movies whose name equals the query, ignoring case.
    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<Movie>, CatalogError> {
        self.list_where(MovieFilter::name(name)).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_name_partial(&self, name: &str) -> Result<Vec<Movie>, CatalogError> {
        self.list_where(MovieFilter::name_contains(name)).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_director(&self, director: DirectorId) -> Result<Vec<Movie>, CatalogError> {
        self.list_where(MovieFilter::Director(director)).await
    }

    /// All movies by name, ignoring case. Ties keep registration order.
    pub async fn list_sorted_by_name(&self) -> Result<Vec<Movie>, CatalogError> {
        let mut movies = self.list_all().await?;
        movies.sort_by_key(Movie::name_key);
        Ok(movies)
    }

    /// All movies from oldest to newest. Ties keep registration order.
    pub async fn list_sorted_by_release_date(&self) -> Result<Vec<Movie>, CatalogError> {
        let mut movies = self.list_all().await?;
        movies.sort_by_key(Movie::release_date);
        Ok(movies)
    }

    #[instrument(skip(self))]
    pub async fn assign_director(
        &self,
        movie: MovieId,
        director: DirectorId,
    ) -> Result<(), CatalogError> {
        debug!("Assigning {} to {}", director, movie);
        match self
            .inner
            .perform_action(movie, MovieAction::AssignDirector(director))
            .await
            .map_err(Self::map_error)?
        {
            MovieActionResult::AssignDirector(_) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    /// Removes the movie's director and returns who it was.
    #[instrument(skip(self))]
    pub async fn clear_director(&self, movie: MovieId) -> Result<DirectorId, CatalogError> {
        debug!("Clearing director of {}", movie);
        match self
            .inner
            .perform_action(movie, MovieAction::ClearDirector)
            .await
            .map_err(Self::map_error)?
        {
            MovieActionResult::ClearDirector(previous) => Ok(previous),
            other => Err(unexpected(other)),
        }
    }
}
