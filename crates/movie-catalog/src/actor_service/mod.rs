//! # Actor Service
//!
//! Owns the actor store. Actors have no dependencies and no custom actions; registration
//! only checks the profile fields, so an actor with just a name is accepted.
//!
//! ## Structure
//!
//! - [`entity`] - [`Resource`](resource_framework::Resource) implementation for [`Actor`]
//! - [`new()`] - Factory function that creates the service and its client
//!
//! ```rust
//! use movie_catalog::actor_service;
//! use movie_catalog::model::ActorCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (service, client) = actor_service::new(32);
//!     tokio::spawn(service.run(()));
//!
//!     let id = client.register_actor(ActorCreate::new("Tom Hanks")).await?;
//!     assert_eq!(id.to_string(), "actor_1");
//!     Ok(())
//! }
//! ```

pub mod entity;

use crate::clients::ActorClient;
use crate::model::Actor;
use resource_framework::ResourceService;

/// Creates a new actor service and its client.
pub fn new(capacity: usize) -> (ResourceService<Actor>, ActorClient) {
    let (service, generic_client) = ResourceService::new(capacity);
    (service, ActorClient::new(generic_client))
}
