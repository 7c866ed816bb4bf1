//! # System Lifecycle & Orchestration
//!
//! Starts, wires and stops the catalog services.
//!
//! ## Wiring
//!
//! Services are created first and receive their dependencies when they start
//! (`run(context)`):
//!
//! | Service  | Context                        |
//! |----------|--------------------------------|
//! | Actor    | `()`                           |
//! | Director | `()`                           |
//! | Movie    | `DirectorClient`               |
//! | Casting  | `(MovieClient, ActorClient)`   |
//!
//! The graph is acyclic, so dropping the clients held by [`CatalogSystem`] is enough to
//! stop every task.
//!
//! ## Consistency across stores
//!
//! Each store only knows its own records, so [`CatalogSystem`] runs the cascades that
//! keep references valid:
//!
//! - removing a movie deletes its castings
//! - removing an actor deletes the actor's castings
//! - removing a director clears the director of every movie they directed
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the subscriber; set `RUST_LOG=debug` to see every request.

pub mod catalog_system;

pub use catalog_system::*;
pub use resource_framework::tracing::setup_tracing;
