//! # Casting Client
//!
//! High-level API for the casting table: linking and unlinking actors and movies, and
//! reading the links back per movie or per actor.
use crate::error::CatalogError;
use crate::model::{ActorId, Casting, CastingCreate, CastingFilter, CastingId, CastingUpdate, MovieId};
use async_trait::async_trait;
use resource_framework::{FrameworkError, ResourceClient, ServiceClient};
use tracing::{debug, instrument};

/// Client for interacting with the casting service.
#[derive(Clone)]
pub struct CastingClient {
    inner: ResourceClient<Casting>,
}

impl CastingClient {
    pub fn new(inner: ResourceClient<Casting>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ServiceClient<Casting> for CastingClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Casting> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::Conflict(pair) => {
                CatalogError::DuplicateAssociation(format!("{pair} is already cast"))
            }
            other => CatalogError::from_framework("Casting", other),
        }
    }
}

fn pair_label(movie: MovieId, actor: ActorId) -> String {
    format!("{movie}:{actor}")
}

impl CastingClient {
    /// Links `actor` to `movie`.
    ///
    /// # Errors
    /// `NotFound` if either side does not exist, `DuplicateAssociation` if the pair is
    /// already linked.
    #[instrument(skip(self))]
    pub async fn cast(
        &self,
        movie: MovieId,
        actor: ActorId,
        character: Option<String>,
    ) -> Result<CastingId, CatalogError> {
        debug!("Sending request");
        self.inner
            .create(CastingCreate {
                movie_id: movie,
                actor_id: actor,
                character,
            })
            .await
            .map_err(Self::map_error)
    }

    /// Removes the link between `movie` and `actor`.
    #[instrument(skip(self))]
    pub async fn uncast(&self, movie: MovieId, actor: ActorId) -> Result<Casting, CatalogError> {
        debug!("Sending request");
        let removed = self
            .inner
            .delete_where(CastingFilter::Pair(movie, actor))
            .await
            .map_err(Self::map_error)?;
        removed
            .into_iter()
            .next()
            .ok_or_else(|| CatalogError::not_found("Casting", pair_label(movie, actor)))
    }

    /// The link between `movie` and `actor`, if any.
    pub async fn find_pair(
        &self,
        movie: MovieId,
        actor: ActorId,
    ) -> Result<Option<Casting>, CatalogError> {
        let found = self
            .inner
            .list(Some(CastingFilter::Pair(movie, actor)))
            .await
            .map_err(Self::map_error)?;
        Ok(found.into_iter().next())
    }

    /// Changes the character of an existing link.
    #[instrument(skip(self))]
    pub async fn set_character(
        &self,
        movie: MovieId,
        actor: ActorId,
        character: Option<String>,
    ) -> Result<Casting, CatalogError> {
        let casting = self
            .find_pair(movie, actor)
            .await?
            .ok_or_else(|| CatalogError::not_found("Casting", pair_label(movie, actor)))?;
        self.inner
            .update(casting.id, CastingUpdate { character })
            .await
            .map_err(Self::map_error)
    }

    /// Castings of `movie`, in casting order.
    pub async fn for_movie(&self, movie: MovieId) -> Result<Vec<Casting>, CatalogError> {
        self.inner
            .list(Some(CastingFilter::Movie(movie)))
            .await
            .map_err(Self::map_error)
    }

    /// Castings of `actor`, in casting order.
    pub async fn for_actor(&self, actor: ActorId) -> Result<Vec<Casting>, CatalogError> {
        self.inner
            .list(Some(CastingFilter::Actor(actor)))
            .await
            .map_err(Self::map_error)
    }

    /// Deletes every casting of `movie` and returns how many there were.
    #[instrument(skip(self))]
    pub async fn remove_movie(&self, movie: MovieId) -> Result<usize, CatalogError> {
        let removed = self
            .inner
            .delete_where(CastingFilter::Movie(movie))
            .await
            .map_err(Self::map_error)?;
        Ok(removed.len())
    }

    /// Deletes every casting of `actor` and returns how many there were.
    #[instrument(skip(self))]
    pub async fn remove_actor(&self, actor: ActorId) -> Result<usize, CatalogError> {
        let removed = self
            .inner
            .delete_where(CastingFilter::Actor(actor))
            .await
            .map_err(Self::map_error)?;
        Ok(removed.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_framework::mock::{create_mock_client, expect_delete_where, MockClient};

    #[tokio::test]
    async fn test_uncast_deletes_the_pair() {
        let (client, mut receiver) = create_mock_client::<Casting>(10);
        let castings = CastingClient::new(client);

        let task = tokio::spawn(async move { castings.uncast(MovieId(1), ActorId(2)).await });

        let (filter, responder) = expect_delete_where(&mut receiver)
            .await
            .expect("Expected DeleteWhere request");
        assert_eq!(filter, CastingFilter::Pair(MovieId(1), ActorId(2)));
        let removed = Casting::new(
            CastingId(5),
            CastingCreate {
                movie_id: MovieId(1),
                actor_id: ActorId(2),
                character: None,
            },
        );
        responder.send(Ok(vec![removed])).unwrap();

        assert_eq!(task.await.unwrap().unwrap().id, CastingId(5));
    }

    #[tokio::test]
    async fn test_uncast_unlinked_pair_is_not_found() {
        let mut mock = MockClient::<Casting>::new();
        mock.expect_delete_where().return_ok(vec![]);

        let castings = CastingClient::new(mock.client());
        assert!(matches!(
            castings.uncast(MovieId(1), ActorId(2)).await,
            Err(CatalogError::NotFound { entity: "Casting", .. })
        ));
        mock.verify();
    }

    #[tokio::test]
    async fn test_duplicate_pair_is_duplicate_association() {
        let mut mock = MockClient::<Casting>::new();
        mock.expect_create()
            .return_err(FrameworkError::Conflict("movie_1:actor_2".into()));

        let castings = CastingClient::new(mock.client());
        assert!(matches!(
            castings.cast(MovieId(1), ActorId(2), None).await,
            Err(CatalogError::DuplicateAssociation(_))
        ));
        mock.verify();
    }

    #[tokio::test]
    async fn test_set_character_on_missing_link_is_not_found() {
        let mut mock = MockClient::<Casting>::new();
        mock.expect_list().return_ok(vec![]);

        let castings = CastingClient::new(mock.client());
        let result = castings
            .set_character(MovieId(1), ActorId(2), Some("Rose".into()))
            .await;
        assert!(matches!(result, Err(CatalogError::NotFound { .. })));
        mock.verify();
    }
}
