//! # Movie Catalog
//!
//! In-memory catalog of movies, actors and directors built on `resource-framework`.
//!
//! - **[model]**: records and payloads ([`Actor`](model::Actor), [`Director`](model::Director),
//!   [`Movie`](model::Movie), [`Casting`](model::Casting)) plus the [`Person`](model::Person) contract.
//! - **Services**: [`actor_service`], [`director_service`], [`movie_service`] and
//!   [`casting_service`], each owning one store in its own task.
//! - **[clients]**: typed wrappers that hide the message passing.
//! - **[lifecycle]**: [`CatalogSystem`](lifecycle::CatalogSystem), which wires the services and
//!   runs removal cascades.
//! - **[controller]**: [`CatalogController`](controller::CatalogController), returning
//!   [`OperationResult`](outcome::OperationResult) for every operation.
//!
//! See [`resource_framework::mock`] for utilities to test clients without spawning services.

pub mod actor_service;
pub mod casting_service;
pub mod clients;
pub mod config;
pub mod controller;
pub mod director_service;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod movie_service;
pub mod outcome;
