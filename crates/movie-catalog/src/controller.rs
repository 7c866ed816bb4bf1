//! # Catalog Controller
//!
//! Facade over [`CatalogSystem`] that turns every outcome into an [`OperationResult`],
//! for callers (such as the console menu) that only display messages.

use crate::error::CatalogError;
use crate::lifecycle::CatalogSystem;
use crate::model::{
    Actor, ActorCreate, ActorId, CastMember, Casting, CastingId, Director, DirectorCreate,
    DirectorId, Movie, MovieCreate, MovieId,
};
use crate::outcome::OperationResult;
use resource_framework::ServiceClient;
use std::fmt::Display;

fn respond<T>(result: Result<T, CatalogError>, message: impl FnOnce(&T) -> String) -> OperationResult<T> {
    match result {
        Ok(value) => {
            let message = message(&value);
            OperationResult::success_with(message, value)
        }
        Err(e) => OperationResult::from_error(&e),
    }
}

fn found<T>(result: Result<Option<T>, CatalogError>, entity: &str, key: impl Display) -> OperationResult<T> {
    match result {
        Ok(Some(value)) => OperationResult::success_with(format!("{entity} found"), value),
        Ok(None) => OperationResult::failure(format!("{entity} not found: {key}")),
        Err(e) => OperationResult::from_error(&e),
    }
}

fn listed<T>(result: Result<Vec<T>, CatalogError>, what: &str) -> OperationResult<Vec<T>> {
    respond(result, |items| format!("{} {what}", items.len()))
}

fn removed(result: Result<bool, CatalogError>, entity: &str, id: impl Display) -> OperationResult<()> {
    match result {
        Ok(true) => OperationResult::success(format!("{entity} {id} removed")),
        Ok(false) => OperationResult::failure(format!("{entity} not found: {id}")),
        Err(e) => OperationResult::from_error(&e),
    }
}

/// Message-oriented entry point to the catalog.
pub struct CatalogController {
    system: CatalogSystem,
}

impl CatalogController {
    pub fn new(system: CatalogSystem) -> Self {
        Self { system }
    }

    pub fn system(&self) -> &CatalogSystem {
        &self.system
    }

    pub async fn shutdown(self) -> Result<(), String> {
        self.system.shutdown().await
    }

    // --- Actors ---

    pub async fn register_actor(&self, params: ActorCreate) -> OperationResult<ActorId> {
        respond(self.system.actors.register_actor(params).await, |id| {
            format!("Actor registered as {id}")
        })
    }

    pub async fn find_actor(&self, id: ActorId) -> OperationResult<Actor> {
        found(self.system.actors.find_by_id(id).await, "Actor", id)
    }

    pub async fn find_actor_by_name(&self, name: &str) -> OperationResult<Actor> {
        found(self.system.actors.find_by_name(name).await, "Actor", name.trim())
    }

    pub async fn search_actors(&self, name: &str) -> OperationResult<Vec<Actor>> {
        listed(self.system.actors.find_by_name_partial(name).await, "actor(s) found")
    }

    pub async fn list_actors(&self) -> OperationResult<Vec<Actor>> {
        listed(self.system.actors.list_all().await, "actor(s) registered")
    }

    pub async fn update_actor(&self, actor: &Actor) -> OperationResult<Actor> {
        respond(self.system.actors.update_actor(actor).await, |a| {
            format!("Actor {} updated", a.id)
        })
    }

    pub async fn remove_actor(&self, id: ActorId) -> OperationResult<()> {
        removed(self.system.remove_actor(id).await, "Actor", id)
    }

    pub async fn actor_details(&self, id: ActorId) -> OperationResult<String> {
        found(self.system.actor_details(id).await, "Actor", id)
    }

    pub async fn filmography(&self, id: ActorId) -> OperationResult<Vec<Movie>> {
        listed(self.system.filmography(id).await, "movie(s) in filmography")
    }

    // --- Directors ---

    pub async fn register_director(&self, params: DirectorCreate) -> OperationResult<DirectorId> {
        respond(self.system.directors.register_director(params).await, |id| {
            format!("Director registered as {id}")
        })
    }

    pub async fn find_director(&self, id: DirectorId) -> OperationResult<Director> {
        found(self.system.directors.find_by_id(id).await, "Director", id)
    }

    pub async fn find_director_by_name(&self, name: &str) -> OperationResult<Director> {
        found(
            self.system.directors.find_by_name(name).await,
            "Director",
            name.trim(),
        )
    }

    pub async fn search_directors(&self, name: &str) -> OperationResult<Vec<Director>> {
        listed(
            self.system.directors.find_by_name_partial(name).await,
            "director(s) found",
        )
    }

    pub async fn list_directors(&self) -> OperationResult<Vec<Director>> {
        listed(self.system.directors.list_all().await, "director(s) registered")
    }

    pub async fn update_director(&self, director: &Director) -> OperationResult<Director> {
        respond(self.system.directors.update_director(director).await, |d| {
            format!("Director {} updated", d.id)
        })
    }

    pub async fn remove_director(&self, id: DirectorId) -> OperationResult<()> {
        removed(self.system.remove_director(id).await, "Director", id)
    }

    pub async fn director_details(&self, id: DirectorId) -> OperationResult<String> {
        found(self.system.director_details(id).await, "Director", id)
    }

    pub async fn directed_movies(&self, id: DirectorId) -> OperationResult<Vec<Movie>> {
        listed(self.system.directed_movies(id).await, "movie(s) directed")
    }

    // --- Movies ---

    pub async fn register_movie(&self, params: MovieCreate) -> OperationResult<MovieId> {
        respond(self.system.movies.register_movie(params).await, |id| {
            format!("Movie registered as {id}")
        })
    }

    pub async fn find_movie(&self, id: MovieId) -> OperationResult<Movie> {
        found(self.system.movies.find_by_id(id).await, "Movie", id)
    }

    pub async fn find_movies_by_name(&self, name: &str) -> OperationResult<Vec<Movie>> {
        listed(self.system.movies.find_by_name(name).await, "movie(s) found")
    }

    pub async fn search_movies(&self, name: &str) -> OperationResult<Vec<Movie>> {
        listed(self.system.movies.find_by_name_partial(name).await, "movie(s) found")
    }

    pub async fn movies_by_actor(&self, actor: ActorId) -> OperationResult<Vec<Movie>> {
        self.filmography(actor).await
    }

    pub async fn list_movies(&self) -> OperationResult<Vec<Movie>> {
        listed(self.system.movies.list_all().await, "movie(s) registered")
    }

    pub async fn list_movies_by_name(&self) -> OperationResult<Vec<Movie>> {
        listed(self.system.movies.list_sorted_by_name().await, "movie(s) by name")
    }

    pub async fn list_movies_by_release_date(&self) -> OperationResult<Vec<Movie>> {
        listed(
            self.system.movies.list_sorted_by_release_date().await,
            "movie(s) by release date",
        )
    }

    pub async fn update_movie(&self, movie: &Movie) -> OperationResult<Movie> {
        respond(self.system.movies.update_movie(movie).await, |m| {
            format!("Movie {} updated", m.id)
        })
    }

    pub async fn remove_movie(&self, id: MovieId) -> OperationResult<()> {
        removed(self.system.remove_movie(id).await, "Movie", id)
    }

    pub async fn movie_details(&self, id: MovieId) -> OperationResult<String> {
        found(self.system.movie_details(id).await, "Movie", id)
    }

    pub async fn cast_of(&self, id: MovieId) -> OperationResult<Vec<CastMember>> {
        listed(self.system.cast_of(id).await, "cast member(s)")
    }

    // --- Associations ---

    pub async fn cast(
        &self,
        movie: MovieId,
        actor: ActorId,
        character: Option<String>,
    ) -> OperationResult<CastingId> {
        respond(self.system.cast(movie, actor, character).await, |_| {
            format!("{actor} added to {movie}")
        })
    }

    pub async fn uncast(&self, movie: MovieId, actor: ActorId) -> OperationResult<()> {
        match self.system.uncast(movie, actor).await {
            Ok(()) => OperationResult::success(format!("{actor} removed from {movie}")),
            Err(e) => OperationResult::from_error(&e),
        }
    }

    pub async fn set_character(
        &self,
        movie: MovieId,
        actor: ActorId,
        character: Option<String>,
    ) -> OperationResult<Casting> {
        respond(self.system.set_character(movie, actor, character).await, |c| {
            match c.character() {
                Some(character) => format!("{actor} plays {character} in {movie}"),
                None => format!("Character of {actor} in {movie} cleared"),
            }
        })
    }

    pub async fn assign_director(&self, movie: MovieId, director: DirectorId) -> OperationResult<()> {
        match self.system.assign_director(movie, director).await {
            Ok(()) => OperationResult::success(format!("{director} now directs {movie}")),
            Err(e) => OperationResult::from_error(&e),
        }
    }

    pub async fn clear_director(&self, movie: MovieId) -> OperationResult<DirectorId> {
        respond(self.system.clear_director(movie).await, |previous| {
            format!("{previous} no longer directs {movie}")
        })
    }
}
