use super::ids::ActorId;
use super::person::{Person, PersonProfile, MIN_ACTOR_AGE};
use crate::error::CatalogError;
use serde::Serialize;

/// A registered actor.
///
/// # Resource Framework
/// Managed by the actor service (see [`crate::actor_service`]). The movies an actor appears
/// in are not stored here; they are derived from the casting table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Actor {
    pub id: ActorId,
    pub profile: PersonProfile,
}

/// Payload for registering an actor.
#[derive(Debug, Clone, Default)]
pub struct ActorCreate {
    pub name: String,
    pub age: Option<i32>,
    pub nationality: Option<String>,
}

impl ActorCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = Some(nationality.into());
        self
    }
}

/// Replacement profile for an existing actor.
#[derive(Debug, Clone)]
pub struct ActorUpdate {
    pub profile: PersonProfile,
}

impl From<&Actor> for ActorUpdate {
    fn from(actor: &Actor) -> Self {
        Self {
            profile: actor.profile.clone(),
        }
    }
}

impl Actor {
    pub fn new(id: ActorId, params: ActorCreate) -> Result<Self, CatalogError> {
        let profile = PersonProfile::new(&params.name, params.age, params.nationality.as_deref())?;
        Ok(Self { id, profile })
    }
}

impl Person for Actor {
    fn profile(&self) -> &PersonProfile {
        &self.profile
    }

    fn check(&self) -> Result<(), CatalogError> {
        self.profile.check_basics("actor", MIN_ACTOR_AGE)
    }

    fn describe(&self) -> String {
        format!("Actor {}\n{}", self.id, self.profile.describe_lines())
    }
}
