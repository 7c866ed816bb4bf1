//! # Framework Errors
//!
//! Errors produced by the service plumbing itself. Entity-specific failures travel inside
//! [`FrameworkError::EntityError`] and can be recovered with [`FrameworkError::downcast_entity`].

/// Errors that can occur within the resource framework.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Service closed")]
    ServiceClosed,
    #[error("Service dropped response channel")]
    ServiceDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Unique key already in use: {0}")]
    Conflict(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers a typed entity error.
    ///
    /// Returns `Err(self)` unchanged when this is not an `EntityError`, or when the boxed
    /// error is of a different type.
    pub fn downcast_entity<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(typed) => Ok(*typed),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}
