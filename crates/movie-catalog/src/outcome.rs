//! Uniform result envelope returned by the [`CatalogController`](crate::controller::CatalogController).

use crate::error::CatalogError;
use serde::Serialize;
use std::fmt;

/// Success flag, human-readable message and optional payload.
///
/// Built only through the factory functions; the fields cannot change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationResult<T> {
    success: bool,
    message: String,
    payload: Option<T>,
}

impl<T> OperationResult<T> {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            payload: None,
        }
    }

    pub fn success_with(message: impl Into<String>, payload: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            payload: Some(payload),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            payload: None,
        }
    }

    pub fn from_error(error: &CatalogError) -> Self {
        Self::failure(error.to_string())
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    pub fn into_payload(self) -> Option<T> {
        self.payload
    }
}

impl<T> fmt::Display for OperationResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.success { "SUCCESS" } else { "ERROR" };
        write!(f, "{status} - {}", self.message)
    }
}
