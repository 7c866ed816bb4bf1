//! # Resource Trait
//!
//! The `Resource` trait is the contract every stored entity (Actor, Director, Movie, Casting, …)
//! implements to be managed by the generic [`ResourceService`](crate::ResourceService).
//! It names the associated types for ids, DTOs, filters, actions, context and errors, and
//! provides the lifecycle hooks (`on_create`, `on_update`, `on_delete`, `handle_action`).
//!
//! # Provided Methods
//! - [`Resource::unique_key`] - store-wide uniqueness constraint (default: none)
//! - [`Resource::matches`] - filter predicate for list queries (default: matches everything)
//! - [`Resource::on_create`] / [`Resource::on_delete`] - default to `Ok(())`
//!
//! Hooks that take `&mut self` run against a working copy. The service only commits the
//! copy when the hook succeeds, so an entity never has to undo a half-applied change.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any stored entity must implement to be managed by a `ResourceService`.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks can await other services. `Context` is injected
/// into every hook when the service starts (`run(context)`), which lets an entity depend on
/// clients that were created after the service itself.
#[async_trait]
pub trait Resource: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier for this entity.
    ///
    /// Ids are generated by the service from a monotonically increasing `u64` counter, and the
    /// store is ordered by id, so listing order equals registration order.
    type Id: Ord + Eq + Hash + Clone + Send + Sync + Display + Debug + From<u64>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Criteria accepted by list and bulk-delete requests.
    type Filter: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `AssignDirector`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the service.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the assigned id and the payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Key that must be unique across the store.
    ///
    /// Two records with different ids may not share a key. Creates and updates that would
    /// violate this are rejected with [`FrameworkError::Conflict`](crate::FrameworkError::Conflict).
    fn unique_key(&self) -> Option<String> {
        None
    }

    /// Whether this entity satisfies `filter`.
    fn matches(&self, _filter: &Self::Filter) -> bool {
        true
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is built and before it is stored.
    /// Use this hook for validation that needs the context (e.g., checking other services).
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
