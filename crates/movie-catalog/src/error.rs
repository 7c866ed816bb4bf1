//! # Catalog Errors
//!
//! One error type for the whole catalog. Entity hooks return it directly; typed clients
//! convert [`FrameworkError`] back into it with [`CatalogError::from_framework`].

use resource_framework::FrameworkError;
use serde::Serialize;

/// Errors reported by catalog operations.
///
/// Every variant is recoverable: the store that rejected the request is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
    #[error("Association already exists: {0}")]
    DuplicateAssociation(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

impl CatalogError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Maps a framework error raised while talking to the `entity` service.
    pub fn from_framework(entity: &'static str, error: FrameworkError) -> Self {
        match error.downcast_entity::<CatalogError>() {
            Ok(catalog) => catalog,
            Err(FrameworkError::NotFound(id)) => Self::NotFound { entity, id },
            Err(FrameworkError::Conflict(key)) => {
                Self::Conflict(format!("{entity} '{key}' already exists"))
            }
            Err(other) => Self::Unavailable(format!("{entity} service: {other}")),
        }
    }
}
