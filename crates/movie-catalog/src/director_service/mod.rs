//! # Director Service
//!
//! Owns the director store. Unlike actors, directors must pass the full rule set
//! ([`Person::check`](crate::model::Person::check)) both when registered and when updated.

pub mod entity;

use crate::clients::DirectorClient;
use crate::model::Director;
use resource_framework::ResourceService;

/// Creates a new director service and its client.
pub fn new(capacity: usize) -> (ResourceService<Director>, DirectorClient) {
    let (service, generic_client) = ResourceService::new(capacity);
    (service, DirectorClient::new(generic_client))
}
