//! # Resource Framework
//!
//! Building blocks for in-memory stores where each entity type lives inside its own Tokio
//! task. A store is a [`ResourceService`] that owns its records and processes requests one
//! at a time; callers talk to it through a cloneable [`ResourceClient`].
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`Resource`]) - domain records, their DTOs and lifecycle hooks
//! 2. **Runtime Layer** ([`ResourceService`]) - message loop, id assignment, uniqueness, filtering
//! 3. **Interface Layer** ([`ResourceClient`], [`ServiceClient`]) - typed request/response calls
//!
//! Business rules are written once in the `Resource` impl. The service handles the message
//! passing and commits a change only when every hook agreed to it.
//!
//! ```rust
//! use async_trait::async_trait;
//! use resource_framework::{Resource, ResourceService};
//!
//! #[derive(Clone, Debug)]
//! struct Genre {
//!     id: u64,
//!     name: String,
//! }
//!
//! #[derive(Debug)] struct GenreCreate { name: String }
//! #[derive(Debug)] struct GenreError;
//! impl std::fmt::Display for GenreError {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "bad genre") }
//! }
//! impl std::error::Error for GenreError {}
//!
//! #[async_trait]
//! impl Resource for Genre {
//!     type Id = u64;
//!     type Create = GenreCreate;
//!     type Update = String;
//!     type Filter = String;
//!     type Action = ();
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = GenreError;
//!
//!     fn from_create_params(id: u64, params: GenreCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, name: params.name })
//!     }
//!
//!     fn unique_key(&self) -> Option<String> {
//!         Some(self.name.to_lowercase())
//!     }
//!
//!     fn matches(&self, filter: &String) -> bool {
//!         self.name.contains(filter.as_str())
//!     }
//!
//!     async fn on_update(&mut self, name: String, _ctx: &()) -> Result<(), Self::Error> {
//!         self.name = name;
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (service, client) = ResourceService::<Genre>::new(10);
//!     tokio::spawn(service.run(()));
//!
//!     let id = client.create(GenreCreate { name: "Drama".into() }).await.unwrap();
//!     assert_eq!(id, 1);
//!     assert!(client.create(GenreCreate { name: "drama".into() }).await.is_err());
//!     assert_eq!(client.list(Some("Dra".into())).await.unwrap().len(), 1);
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are handed to [`ResourceService::run`], not to the constructor. Create every
//! service first, then start each one with clones of the clients it needs. The graph must
//! stay acyclic so that dropping the outer clients shuts everything down.
//!
//! ## Testing
//!
//! The [`mock`] module provides a `MockClient` that answers requests from a queue of
//! expectations, for unit tests that should not spawn real services.

pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod service;
pub mod tracing;

// Re-export core types for convenience
pub use client::ResourceClient;
pub use client_trait::ServiceClient;
pub use entity::Resource;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use service::ResourceService;
