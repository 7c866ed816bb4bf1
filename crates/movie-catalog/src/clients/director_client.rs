//! # Director Client
//!
//! High-level API for the director service.
use crate::error::CatalogError;
use crate::model::{Director, DirectorCreate, DirectorId, DirectorUpdate, NameFilter};
use async_trait::async_trait;
use resource_framework::{FrameworkError, ResourceClient, ServiceClient};
use tracing::{debug, instrument};

/// Client for interacting with the director service.
#[derive(Clone)]
pub struct DirectorClient {
    inner: ResourceClient<Director>,
}

impl DirectorClient {
    pub fn new(inner: ResourceClient<Director>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ServiceClient<Director> for DirectorClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Director> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CatalogError::from_framework("Director", e)
    }
}

impl DirectorClient {
    #[instrument(skip(self))]
    pub async fn register_director(
        &self,
        params: DirectorCreate,
    ) -> Result<DirectorId, CatalogError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, director), fields(director_id = %director.id))]
    pub async fn update_director(&self, director: &Director) -> Result<Director, CatalogError> {
        debug!("Sending request");
        self.inner
            .update(director.id, DirectorUpdate::from(director))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Director>, CatalogError> {
        let matches = self
            .inner
            .list(Some(NameFilter::exact(name)))
            .await
            .map_err(Self::map_error)?;
        Ok(matches.into_iter().next())
    }

    #[instrument(skip(self))]
    pub async fn find_by_name_partial(&self, name: &str) -> Result<Vec<Director>, CatalogError> {
        self.inner
            .list(Some(NameFilter::contains(name)))
            .await
            .map_err(Self::map_error)
    }
}
