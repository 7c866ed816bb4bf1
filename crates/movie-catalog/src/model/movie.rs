use super::ids::{DirectorId, MovieId};
use super::person::{optional_text, required_text, NOT_INFORMED};
use crate::error::CatalogError;
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// A registered movie.
///
/// Equality is by id: two snapshots of the same stored movie compare equal even when
/// one of them has been edited locally.
///
/// The cast is not stored here; it is derived from the casting table. The director is a
/// plain reference changed through the movie service's actions.
#[derive(Debug, Clone, Serialize)]
pub struct Movie {
    pub id: MovieId,
    name: String,
    release_date: NaiveDate,
    budget: Option<f64>,
    description: Option<String>,
    director: Option<DirectorId>,
}

impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Payload for registering a movie.
#[derive(Debug, Clone)]
pub struct MovieCreate {
    pub name: String,
    pub release_date: NaiveDate,
    pub budget: Option<f64>,
    pub description: Option<String>,
    pub director: Option<DirectorId>,
}

impl MovieCreate {
    pub fn new(name: impl Into<String>, release_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            release_date,
            budget: None,
            description: None,
            director: None,
        }
    }

    pub fn budget(mut self, budget: f64) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn director(mut self, director: DirectorId) -> Self {
        self.director = Some(director);
        self
    }
}

/// Replacement scalars for an existing movie. The director reference is not part of an
/// update.
#[derive(Debug, Clone)]
pub struct MovieUpdate {
    pub name: String,
    pub release_date: NaiveDate,
    pub budget: Option<f64>,
    pub description: Option<String>,
}

impl From<&Movie> for MovieUpdate {
    fn from(movie: &Movie) -> Self {
        Self {
            name: movie.name.clone(),
            release_date: movie.release_date,
            budget: movie.budget,
            description: movie.description.clone(),
        }
    }
}

/// Criteria for movie list queries.
#[derive(Debug, Clone, PartialEq)]
pub enum MovieFilter {
    /// Case-insensitive equality.
    Name(String),
    /// Case-insensitive substring. A blank query matches nothing.
    NameContains(String),
    Director(DirectorId),
}

impl MovieFilter {
    pub fn name(query: &str) -> Self {
        Self::Name(query.trim().to_lowercase())
    }

    pub fn name_contains(query: &str) -> Self {
        Self::NameContains(query.trim().to_lowercase())
    }
}

fn check_release_date(release_date: NaiveDate) -> Result<NaiveDate, CatalogError> {
    if release_date > Local::now().date_naive() {
        return Err(CatalogError::invalid(format!(
            "release date {release_date} is in the future"
        )));
    }
    Ok(release_date)
}

fn check_budget(budget: Option<f64>) -> Result<Option<f64>, CatalogError> {
    match budget {
        Some(b) if !b.is_finite() || b < 0.0 => Err(CatalogError::invalid(
            "budget must be a non-negative amount",
        )),
        other => Ok(other),
    }
}

impl Movie {
    pub fn new(id: MovieId, name: &str, release_date: NaiveDate) -> Result<Self, CatalogError> {
        Ok(Self {
            id,
            name: required_text("movie name", name)?,
            release_date: check_release_date(release_date)?,
            budget: None,
            description: None,
            director: None,
        })
    }

    pub(crate) fn from_create(id: MovieId, params: MovieCreate) -> Result<Self, CatalogError> {
        let mut movie = Self::new(id, &params.name, params.release_date)?;
        movie.budget = check_budget(params.budget)?;
        movie.description = optional_text(params.description.as_deref());
        movie.director = params.director;
        Ok(movie)
    }

    /// Applies every field of `update`, or none of them.
    pub(crate) fn apply(&mut self, update: MovieUpdate) -> Result<(), CatalogError> {
        let name = required_text("movie name", &update.name)?;
        let release_date = check_release_date(update.release_date)?;
        let budget = check_budget(update.budget)?;
        self.name = name;
        self.release_date = release_date;
        self.budget = budget;
        self.description = optional_text(update.description.as_deref());
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn release_date(&self) -> NaiveDate {
        self.release_date
    }

    pub fn budget(&self) -> Option<f64> {
        self.budget
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn director(&self) -> Option<DirectorId> {
        self.director
    }

    pub(crate) fn set_director(&mut self, director: Option<DirectorId>) {
        self.director = director;
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), CatalogError> {
        self.name = required_text("movie name", name)?;
        Ok(())
    }

    pub fn set_release_date(&mut self, release_date: NaiveDate) -> Result<(), CatalogError> {
        self.release_date = check_release_date(release_date)?;
        Ok(())
    }

    pub fn set_budget(&mut self, budget: Option<f64>) -> Result<(), CatalogError> {
        self.budget = check_budget(budget)?;
        Ok(())
    }

    pub fn set_description(&mut self, description: Option<&str>) {
        self.description = optional_text(description);
    }

    /// Re-checks the name and release date.
    pub fn validate_required_fields(&self) -> Result<(), CatalogError> {
        required_text("movie name", &self.name)?;
        check_release_date(self.release_date)?;
        Ok(())
    }

    /// Lowercased name, unique across the movie store.
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn matches_filter(&self, filter: &MovieFilter) -> bool {
        match filter {
            MovieFilter::Name(query) => self.name_key() == *query,
            MovieFilter::NameContains(query) => {
                !query.is_empty() && self.name_key().contains(query.as_str())
            }
            MovieFilter::Director(director) => self.director == Some(*director),
        }
    }

    pub fn describe(&self) -> String {
        let budget = self
            .budget
            .map_or_else(|| NOT_INFORMED.to_string(), |b| format!("{b:.2}"));
        let director = self
            .director
            .map_or_else(|| NOT_INFORMED.to_string(), |d| d.to_string());
        format!(
            "Movie {}\nName: {}\nRelease date: {}\nBudget: {}\nDescription: {}\nDirector: {}",
            self.id,
            self.name,
            self.release_date,
            budget,
            self.description.as_deref().unwrap_or(NOT_INFORMED),
            director
        )
    }
}
