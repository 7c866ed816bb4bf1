//! Typed clients, one per service.
//!
//! Each wraps a [`ResourceClient`](resource_framework::ResourceClient), implements
//! [`ServiceClient`](resource_framework::ServiceClient) for the shared lookups and maps
//! framework errors into [`CatalogError`](crate::error::CatalogError).

pub mod actor_client;
pub mod casting_client;
pub mod director_client;
pub mod movie_client;

pub use actor_client::ActorClient;
pub use casting_client::CastingClient;
pub use director_client::DirectorClient;
pub use movie_client::MovieClient;
