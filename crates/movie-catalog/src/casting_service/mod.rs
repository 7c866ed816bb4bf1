//! # Casting Service
//!
//! Owns the casting table, the single record of which actor appears in which movie.
//! At most one casting exists per (movie, actor) pair, and both sides must exist when
//! the casting is created. The movie and actor clients are injected as context.

pub mod entity;

use crate::clients::CastingClient;
use crate::model::Casting;
use resource_framework::ResourceService;

/// Creates a new casting service and its client.
///
/// The service must be run with `(MovieClient, ActorClient)` as context.
pub fn new(capacity: usize) -> (ResourceService<Casting>, CastingClient) {
    let (service, generic_client) = ResourceService::new(capacity);
    (service, CastingClient::new(generic_client))
}
