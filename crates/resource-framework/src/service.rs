//! # Generic Resource Service
//!
//! This module defines the `ResourceService`, the component that owns the store of one
//! entity type. It is the "server" side of the pattern: requests arrive over a channel and
//! are processed one at a time, so the store needs no locking.

use crate::client::ResourceClient;
use crate::entity::Resource;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic service that manages a collection of entities.
///
/// `ResourceService<T>` owns the in-memory store for an entity type `T: Resource` and the
/// counter used to assign ids. Each service runs in its own Tokio task and processes
/// incoming [`ResourceRequest<T>`] messages sequentially, which gives every
/// read-modify-write sequence exclusive access to the store.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceService::new()` to get the `service` and its `client`.
/// 2.  **Wire**: Pass dependencies (other clients) into `service.run(context)`.
/// 3.  **Run**: Spawn the run loop in a background task.
///
/// ```rust,ignore
/// let (service, client) = ResourceService::<Movie>::new(32);
/// tokio::spawn(service.run(director_client));
/// let id = client.create(params).await?;
/// ```
///
/// # Implementation Details
///
/// The store is a `BTreeMap` keyed by id. Ids come from a `u64` counter starting at 1 that
/// only advances when a create succeeds, so ids are dense, strictly increasing and list
/// queries return records in registration order.
///
/// Mutating hooks (`on_update`, `handle_action`) run against a clone of the stored record.
/// The clone replaces the original only when the hook succeeds and the unique key is still
/// free; otherwise the store is left exactly as it was.
pub struct ResourceService<T: Resource> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u64,
}

fn entity_error<E>(e: E) -> FrameworkError
where
    E: std::error::Error + Send + Sync + 'static,
{
    FrameworkError::EntityError(Box::new(e))
}

impl<T: Resource> ResourceService<T> {
    /// Creates a new `ResourceService` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (service, client)
    }

    /// Runs the service's event loop, processing messages until every client is dropped.
    ///
    /// # Context Injection
    /// The `context` argument is handed to every entity hook. This allows entities
    /// to reach dependencies (like other clients) that were created *after*
    /// the service was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Just the type name ("Movie" rather than "movie_catalog::model::movie::Movie")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Service started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    match &result {
                        Ok(id) => info!(entity_type, %id, size = self.store.len(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { filter, respond_to } => {
                    let items: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| filter.as_ref().is_none_or(|f| item.matches(f)))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?filter, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.update(id.clone(), update, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id, &context).await;
                    match &result {
                        Ok(()) => info!(entity_type, %id, size = self.store.len(), "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::DeleteWhere { filter, respond_to } => {
                    debug!(entity_type, ?filter, "DeleteWhere");
                    let result = self.delete_where(&filter, &context).await;
                    match &result {
                        Ok(removed) => info!(
                            entity_type,
                            removed = removed.len(),
                            size = self.store.len(),
                            "Deleted matching"
                        ),
                        Err(e) => warn!(entity_type, error = %e, "DeleteWhere failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = self.perform_action(id.clone(), action, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn key_in_use(&self, key: &str, except: Option<&T::Id>) -> bool {
        self.store
            .iter()
            .filter(|(id, _)| Some(*id) != except)
            .any(|(_, item)| item.unique_key().as_deref() == Some(key))
    }

    fn check_unique(&self, item: &T, except: Option<&T::Id>) -> Result<(), FrameworkError> {
        match item.unique_key() {
            Some(key) if self.key_in_use(&key, except) => Err(FrameworkError::Conflict(key)),
            _ => Ok(()),
        }
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T::Id, FrameworkError> {
        let id = T::Id::from(self.next_id);
        let mut item = T::from_create_params(id.clone(), params).map_err(entity_error)?;
        self.check_unique(&item, None)?;
        item.on_create(context).await.map_err(entity_error)?;

        self.next_id += 1;
        self.store.insert(id.clone(), item);
        Ok(id)
    }

    async fn update(
        &mut self,
        id: T::Id,
        update: T::Update,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        let mut working = self
            .store
            .get(&id)
            .cloned()
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        working
            .on_update(update, context)
            .await
            .map_err(entity_error)?;
        self.check_unique(&working, Some(&id))?;

        self.store.insert(id, working.clone());
        Ok(working)
    }

    async fn delete(&mut self, id: &T::Id, context: &T::Context) -> Result<(), FrameworkError> {
        let item = self
            .store
            .get(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_delete(context).await.map_err(entity_error)?;
        self.store.remove(id);
        Ok(())
    }

    async fn delete_where(
        &mut self,
        filter: &T::Filter,
        context: &T::Context,
    ) -> Result<Vec<T>, FrameworkError> {
        let doomed: Vec<T::Id> = self
            .store
            .iter()
            .filter(|(_, item)| item.matches(filter))
            .map(|(id, _)| id.clone())
            .collect();

        // Every hook must agree before anything is removed.
        for id in &doomed {
            if let Some(item) = self.store.get(id) {
                item.on_delete(context).await.map_err(entity_error)?;
            }
        }

        Ok(doomed
            .iter()
            .filter_map(|id| self.store.remove(id))
            .collect())
    }

    async fn perform_action(
        &mut self,
        id: T::Id,
        action: T::Action,
        context: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        let mut working = self
            .store
            .get(&id)
            .cloned()
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        let result = working
            .handle_action(action, context)
            .await
            .map_err(entity_error)?;
        self.check_unique(&working, Some(&id))?;

        self.store.insert(id, working);
        Ok(result)
    }
}
