//! Domain records and their create/update payloads.

pub mod actor;
pub mod casting;
pub mod credits;
pub mod director;
pub mod ids;
pub mod movie;
pub mod person;

pub use actor::*;
pub use casting::*;
pub use director::*;
pub use ids::*;
pub use movie::*;
pub use person::{NameFilter, Person, PersonProfile, MIN_ACTOR_AGE, MIN_DIRECTOR_AGE};
