//! # ServiceClient Trait
//!
//! Provides a common interface for resource-specific clients, adding default lookup, listing
//! and removal methods built on top of a generic `ResourceClient`.
use crate::{FrameworkError, Resource, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard CRUD operations.
///
/// Implementors supply the inner [`ResourceClient`] and a mapping from [`FrameworkError`]
/// into their own error type; `find_by_id`, `list_all`, `count` and `remove` come for free.
///
/// ```rust,ignore
/// #[async_trait]
/// impl ServiceClient<Actor> for ActorClient {
///     type Error = CatalogError;
///
///     fn inner(&self) -> &ResourceClient<Actor> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         CatalogError::from_framework("Actor", e)
///     }
/// }
///
/// // find_by_id(), list_all() and remove() are provided automatically
/// let everyone = client.list_all().await?;
/// ```
#[async_trait]
pub trait ServiceClient<T: Resource>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by id. Absence is `Ok(None)`, never an error.
    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Every stored entity in registration order.
    #[tracing::instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(None).await.map_err(Self::map_error)
    }

    /// Number of stored entities.
    async fn count(&self) -> Result<usize, Self::Error> {
        Ok(self.list_all().await?.len())
    }

    /// Remove an entity by id.
    ///
    /// Returns `Ok(true)` when a record was removed and `Ok(false)` when none existed.
    #[tracing::instrument(skip(self))]
    async fn remove(&self, id: T::Id) -> Result<bool, Self::Error> {
        tracing::debug!("Sending request");
        match self.inner().delete(id).await {
            Ok(()) => Ok(true),
            Err(FrameworkError::NotFound(_)) => Ok(false),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}
