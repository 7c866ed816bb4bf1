//! The person contract shared by actors and directors.

use crate::error::CatalogError;
use serde::Serialize;

/// Minimum age for an actor with a known age to pass validation.
pub const MIN_ACTOR_AGE: u32 = 18;

/// Minimum age for a director with a known age to pass validation.
pub const MIN_DIRECTOR_AGE: u32 = 21;

pub(crate) const NOT_INFORMED: &str = "not informed";

/// Trims `value` and rejects it when nothing is left.
pub(crate) fn required_text(field: &str, value: &str) -> Result<String, CatalogError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::invalid(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

/// Trims `value`; blank input is stored as absent.
pub(crate) fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn checked_age(age: Option<i32>) -> Result<Option<u32>, CatalogError> {
    age.map(|a| u32::try_from(a).map_err(|_| CatalogError::invalid("age cannot be negative")))
        .transpose()
}

/// Attributes every person carries.
///
/// Fields are private so that each setter can re-validate its own field: the name is
/// never blank and the age is never negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonProfile {
    name: String,
    age: Option<u32>,
    nationality: Option<String>,
}

impl PersonProfile {
    pub fn new(
        name: &str,
        age: Option<i32>,
        nationality: Option<&str>,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            name: required_text("name", name)?,
            age: checked_age(age)?,
            nationality: optional_text(nationality),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn nationality(&self) -> Option<&str> {
        self.nationality.as_deref()
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), CatalogError> {
        self.name = required_text("name", name)?;
        Ok(())
    }

    pub fn set_age(&mut self, age: Option<i32>) -> Result<(), CatalogError> {
        self.age = checked_age(age)?;
        Ok(())
    }

    pub fn set_nationality(&mut self, nationality: Option<&str>) {
        self.nationality = optional_text(nationality);
    }

    /// Rules common to every person: a known age of at least `min_age` and a nationality.
    pub(crate) fn check_basics(&self, role: &str, min_age: u32) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::invalid(format!("{role} name is required")));
        }
        if let Some(age) = self.age {
            if age < min_age {
                return Err(CatalogError::invalid(format!(
                    "{role} must be at least {min_age} years old"
                )));
            }
        }
        if self.nationality.is_none() {
            return Err(CatalogError::invalid(format!(
                "{role} nationality is required"
            )));
        }
        Ok(())
    }

    pub(crate) fn describe_lines(&self) -> String {
        let age = self
            .age
            .map_or_else(|| NOT_INFORMED.to_string(), |a| a.to_string());
        format!(
            "Name: {}\nAge: {}\nNationality: {}",
            self.name,
            age,
            self.nationality.as_deref().unwrap_or(NOT_INFORMED)
        )
    }
}

/// Shared behaviour of actors and directors.
pub trait Person {
    fn profile(&self) -> &PersonProfile;

    /// Applies the variant's rule set, reporting the first violated rule.
    fn check(&self) -> Result<(), CatalogError>;

    fn validate(&self) -> bool {
        self.check().is_ok()
    }

    /// Multi-line text block describing the person.
    fn describe(&self) -> String;

    fn name(&self) -> &str {
        self.profile().name()
    }
}

/// How a name query is compared against stored names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameFilter {
    /// Case-sensitive equality with the trimmed query.
    Exact(String),
    /// Case-insensitive substring.
    Contains(String),
}

impl NameFilter {
    pub fn exact(query: &str) -> Self {
        Self::Exact(query.trim().to_string())
    }

    pub fn contains(query: &str) -> Self {
        Self::Contains(query.trim().to_lowercase())
    }

    /// Blank queries never match.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Exact(query) => !query.is_empty() && name == query,
            Self::Contains(query) => !query.is_empty() && name.to_lowercase().contains(query.as_str()),
        }
    }
}
