//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceService`.

use crate::entity::Resource;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by services.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to a service to request operations.
///
/// The variants map onto the CRUD lifecycle of a stored resource, plus filtered queries
/// and a custom `Action` for resource-specific logic:
///
/// - **Create**: Uses [`Resource::Create`] to build and register a new record.
/// - **Get**: Fetches one record by id (`None` when absent).
/// - **List**: Fetches every record, or those matching a [`Resource::Filter`], in id order.
/// - **Update**: Applies a [`Resource::Update`] to an existing record.
/// - **Delete**: Removes one record by id.
/// - **DeleteWhere**: Removes every record matching a filter as one step.
/// - **Action**: Executes a custom [`Resource::Action`].
#[derive(Debug)]
pub enum ResourceRequest<T: Resource> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        filter: Option<T::Filter>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    DeleteWhere {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
