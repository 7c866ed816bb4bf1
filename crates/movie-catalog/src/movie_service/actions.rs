//! Custom actions for the movie service.
//!
//! The director reference is changed only through these actions, never through a
//! wholesale [`MovieUpdate`](crate::model::MovieUpdate), so the existence check on the
//! director always runs.

use crate::model::DirectorId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieAction {
    /// Sets the director after checking they exist.
    ///
    /// # Errors
    /// `NotFound` for an unknown director, `DuplicateAssociation` when that director is
    /// already assigned.
    AssignDirector(DirectorId),
    /// Removes the director reference.
    ///
    /// # Errors
    /// `NotFound` when the movie has no director.
    ClearDirector,
}

/// Results from MovieActions - variants match 1:1 with MovieAction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieActionResult {
    AssignDirector(DirectorId),
    /// Carries the director that was cleared.
    ClearDirector(DirectorId),
}
