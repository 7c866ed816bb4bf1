//! # Actor Client
//!
//! High-level API for the actor service.
use crate::error::CatalogError;
use crate::model::{Actor, ActorCreate, ActorId, ActorUpdate, NameFilter};
use async_trait::async_trait;
use resource_framework::{FrameworkError, ResourceClient, ServiceClient};
use tracing::{debug, instrument};

/// Client for interacting with the actor service.
#[derive(Clone)]
pub struct ActorClient {
    inner: ResourceClient<Actor>,
}

impl ActorClient {
    pub fn new(inner: ResourceClient<Actor>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ServiceClient<Actor> for ActorClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Actor> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CatalogError::from_framework("Actor", e)
    }
}

impl ActorClient {
    #[instrument(skip(self))]
    pub async fn register_actor(&self, params: ActorCreate) -> Result<ActorId, CatalogError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Replaces the stored profile with `actor`'s, matching by id.
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn update_actor(&self, actor: &Actor) -> Result<Actor, CatalogError> {
        debug!("Sending request");
        self.inner
            .update(actor.id, ActorUpdate::from(actor))
            .await
            .map_err(Self::map_error)
    }

    /// First actor whose name equals the trimmed query exactly.
    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Actor>, CatalogError> {
        let matches = self
            .inner
            .list(Some(NameFilter::exact(name)))
            .await
            .map_err(Self::map_error)?;
        Ok(matches.into_iter().next())
    }

    /// Actors whose name contains the query, ignoring case.
    #[instrument(skip(self))]
    pub async fn find_by_name_partial(&self, name: &str) -> Result<Vec<Actor>, CatalogError> {
        self.inner
            .list(Some(NameFilter::contains(name)))
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_framework::mock::{create_mock_client, expect_list, MockClient};

    fn actor(id: u64, name: &str) -> Actor {
        Actor::new(ActorId(id), ActorCreate::new(name)).unwrap()
    }

    #[tokio::test]
    async fn test_find_by_name_sends_trimmed_exact_filter() {
        let (client, mut receiver) = create_mock_client::<Actor>(10);
        let actors = ActorClient::new(client);

        let task = tokio::spawn(async move { actors.find_by_name("  Tom Hanks ").await });

        let (filter, responder) = expect_list(&mut receiver)
            .await
            .expect("Expected List request");
        assert_eq!(filter, Some(NameFilter::Exact("Tom Hanks".into())));
        responder
            .send(Ok(vec![actor(1, "Tom Hanks"), actor(2, "Tom Hanks")]))
            .unwrap();

        let found = task.await.unwrap().unwrap();
        assert_eq!(found.map(|a| a.id), Some(ActorId(1)));
    }

    #[tokio::test]
    async fn test_validation_error_is_unboxed() {
        let mut mock = MockClient::<Actor>::new();
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(CatalogError::invalid(
                "name is required",
            ))));

        let actors = ActorClient::new(mock.client());
        let result = actors.register_actor(ActorCreate::new("")).await;
        assert_eq!(result, Err(CatalogError::invalid("name is required")));
        mock.verify();
    }

    #[tokio::test]
    async fn test_missing_actor_is_none() {
        let mut mock = MockClient::<Actor>::new();
        mock.expect_get(ActorId(9)).return_ok(None);

        let actors = ActorClient::new(mock.client());
        assert_eq!(actors.find_by_id(ActorId(9)).await, Ok(None));
        mock.verify();
    }
}
