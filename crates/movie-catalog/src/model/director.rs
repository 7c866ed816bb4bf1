use super::ids::DirectorId;
use super::person::{optional_text, Person, PersonProfile, MIN_DIRECTOR_AGE, NOT_INFORMED};
use crate::error::CatalogError;
use serde::Serialize;

/// A registered director.
///
/// Directed movies are derived from the movies that reference this director.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Director {
    pub id: DirectorId,
    pub profile: PersonProfile,
    style: Option<String>,
}

/// Payload for registering a director.
#[derive(Debug, Clone, Default)]
pub struct DirectorCreate {
    pub name: String,
    pub age: Option<i32>,
    pub nationality: Option<String>,
    pub style: Option<String>,
}

impl DirectorCreate {
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

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }
}

/// Replacement fields for an existing director.
#[derive(Debug, Clone)]
pub struct DirectorUpdate {
    pub profile: PersonProfile,
    pub style: Option<String>,
}

impl From<&Director> for DirectorUpdate {
    fn from(director: &Director) -> Self {
        Self {
            profile: director.profile.clone(),
            style: director.style.clone(),
        }
    }
}

impl Director {
    pub fn new(id: DirectorId, params: DirectorCreate) -> Result<Self, CatalogError> {
        let profile = PersonProfile::new(&params.name, params.age, params.nationality.as_deref())?;
        Ok(Self {
            id,
            profile,
            style: optional_text(params.style.as_deref()),
        })
    }

    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    pub fn set_style(&mut self, style: Option<&str>) {
        self.style = optional_text(style);
    }
}

impl Person for Director {
    fn profile(&self) -> &PersonProfile {
        &self.profile
    }

    fn check(&self) -> Result<(), CatalogError> {
        self.profile.check_basics("director", MIN_DIRECTOR_AGE)?;
        if self.style.is_none() {
            return Err(CatalogError::invalid("director style is required"));
        }
        Ok(())
    }

    fn describe(&self) -> String {
        format!(
            "Director {}\n{}\nStyle: {}",
            self.id,
            self.profile.describe_lines(),
            self.style.as_deref().unwrap_or(NOT_INFORMED)
        )
    }
}
