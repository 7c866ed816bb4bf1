//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber used by every service.
//!
//! Services log with an `entity_type` field instead of the module path, so the subscriber
//! hides targets (`with_target(false)`) and uses the compact formatter. Levels come from
//! `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run -p movie-catalog     # Created/Deleted/Shutdown lines
//! RUST_LOG=debug cargo run -p movie-catalog    # Full request payloads
//! ```
//!
//! A registration at `debug` level reads roughly:
//!
//! ```text
//! DEBUG Create entity_type="Actor" params=ActorCreate { name: "Tom Hanks", age: Some(67), .. }
//! INFO Created entity_type="Actor" id=actor_1 size=1
//! DEBUG Get entity_type="Movie" id=movie_1 found=true
//! INFO Created entity_type="Casting" id=casting_1 size=1
//! ```

/// Initializes the global subscriber from `RUST_LOG`.
///
/// Installing a second subscriber is a no-op, so tests and binaries may both call this.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
