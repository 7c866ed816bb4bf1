//! # Movie Service
//!
//! Owns the movie store. Movie names are unique ignoring case, and the director
//! reference is checked against the director service, which is injected as context.
//!
//! ## Structure
//!
//! - [`entity`] - [`Resource`](resource_framework::Resource) implementation for [`Movie`]
//! - [`actions`] - [`MovieAction`] / [`MovieActionResult`] for director changes
//! - [`new()`] - Factory function that creates the service and its client
//!
//! ```rust,ignore
//! let (movie_service, movies) = movie_service::new(32);
//! tokio::spawn(movie_service.run(director_client.clone()));
//! movies.assign_director(titanic, cameron).await?;
//! ```

pub mod actions;
pub mod entity;

pub use actions::*;

use crate::clients::MovieClient;
use crate::model::Movie;
use resource_framework::ResourceService;

/// Creates a new movie service and its client.
///
/// The service must be run with a [`DirectorClient`](crate::clients::DirectorClient) as context.
pub fn new(capacity: usize) -> (ResourceService<Movie>, MovieClient) {
    let (service, generic_client) = ResourceService::new(capacity);
    (service, MovieClient::new(generic_client))
}
