use crate::clients::{ActorClient, CastingClient, DirectorClient, MovieClient};
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::model::credits::{cast_list, movie_list};
use crate::model::{ActorId, CastMember, Casting, CastingId, DirectorId, Movie, MovieId, Person};
use crate::{actor_service, casting_service, director_service, movie_service};
use resource_framework::ServiceClient;
use tokio::sync::Mutex;
use tracing::{error, info, instrument};

/// Runtime orchestrator for the catalog services.
///
/// `CatalogSystem` is responsible for:
/// - **Lifecycle Management**: starting every service task and stopping them again
/// - **Dependency Wiring**: movies get the director client, castings get the movie and
///   actor clients
/// - **Cross-store consistency**: removals cascade into the stores that reference the
///   removed record, and the derived views are assembled here
///
/// Every association change and every cascading removal holds the same lock, so a cast
/// or a director assignment can never interleave with the removal of its target.
///
/// ```ignore
/// let system = CatalogSystem::new();
/// let actor = system.actors.register_actor(ActorCreate::new("Kate Winslet")).await?;
/// let movie = system.movies.register_movie(titanic).await?;
/// system.cast(movie, actor, Some("Rose".into())).await?;
/// assert_eq!(system.filmography(actor).await?.len(), 1);
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    /// Registration, lookup and update. Removals must go through
    /// [`CatalogSystem::remove_actor`]; `ServiceClient::remove` skips the cascade.
    pub actors: ActorClient,
    /// Removals must go through [`CatalogSystem::remove_director`].
    pub directors: DirectorClient,
    /// Removals must go through [`CatalogSystem::remove_movie`]. Director changes must go
    /// through [`CatalogSystem::assign_director`] and [`CatalogSystem::clear_director`].
    pub movies: MovieClient,
    /// Read access to the links. Changes must go through the association methods below.
    pub castings: CastingClient,

    /// Serializes association changes against cascading removals.
    associations: Mutex<()>,

    /// Task handles for all running services (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Default for CatalogSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSystem {
    /// Starts every service with the default configuration.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(&CatalogConfig::default())
    }

    pub fn with_config(config: &CatalogConfig) -> Self {
        let capacity = config.channel_capacity;

        // 1. Create services (no dependencies yet)
        let (actor_service, actors) = actor_service::new(capacity);
        let (director_service, directors) = director_service::new(capacity);
        let (movie_service, movies) = movie_service::new(capacity);
        let (casting_service, castings) = casting_service::new(capacity);

        // 2. Start services with injected context
        let handles = vec![
            tokio::spawn(actor_service.run(())),
            tokio::spawn(director_service.run(())),
            tokio::spawn(movie_service.run(directors.clone())),
            tokio::spawn(casting_service.run((movies.clone(), actors.clone()))),
        ];
        info!(capacity, "Catalog services started");

        Self {
            actors,
            directors,
            movies,
            castings,
            associations: Mutex::new(()),
            handles,
        }
    }

    // --- Associations ---

    /// Links an actor to a movie; both derived views show the link afterwards.
    pub async fn cast(
        &self,
        movie: MovieId,
        actor: ActorId,
        character: Option<String>,
    ) -> Result<CastingId, CatalogError> {
        let _guard = self.associations.lock().await;
        self.castings.cast(movie, actor, character).await
    }

    pub async fn uncast(&self, movie: MovieId, actor: ActorId) -> Result<(), CatalogError> {
        let _guard = self.associations.lock().await;
        self.castings.uncast(movie, actor).await.map(|_| ())
    }

    pub async fn set_character(
        &self,
        movie: MovieId,
        actor: ActorId,
        character: Option<String>,
    ) -> Result<Casting, CatalogError> {
        let _guard = self.associations.lock().await;
        self.castings.set_character(movie, actor, character).await
    }

    pub async fn assign_director(
        &self,
        movie: MovieId,
        director: DirectorId,
    ) -> Result<(), CatalogError> {
        let _guard = self.associations.lock().await;
        self.movies.assign_director(movie, director).await
    }

    pub async fn clear_director(&self, movie: MovieId) -> Result<DirectorId, CatalogError> {
        let _guard = self.associations.lock().await;
        self.movies.clear_director(movie).await
    }

    // --- Derived views ---

    /// Movies the actor appears in, in casting order.
    pub async fn filmography(&self, actor: ActorId) -> Result<Vec<Movie>, CatalogError> {
        let mut movies = Vec::new();
        for casting in self.castings.for_actor(actor).await? {
            if let Some(movie) = self.movies.find_by_id(casting.movie_id).await? {
                movies.push(movie);
            }
        }
        Ok(movies)
    }

    /// Actors in the movie with their characters, in casting order.
    pub async fn cast_of(&self, movie: MovieId) -> Result<Vec<CastMember>, CatalogError> {
        let mut cast = Vec::new();
        for casting in self.castings.for_movie(movie).await? {
            if let Some(actor) = self.actors.find_by_id(casting.actor_id).await? {
                cast.push(CastMember {
                    character: casting.character().map(str::to_string),
                    actor,
                });
            }
        }
        Ok(cast)
    }

    pub async fn directed_movies(&self, director: DirectorId) -> Result<Vec<Movie>, CatalogError> {
        self.movies.find_by_director(director).await
    }

    /// The actor's description followed by their filmography.
    pub async fn actor_details(&self, id: ActorId) -> Result<Option<String>, CatalogError> {
        let Some(actor) = self.actors.find_by_id(id).await? else {
            return Ok(None);
        };
        let movies = self.filmography(id).await?;
        Ok(Some(format!("{}\n{}", actor.describe(), movie_list("Movies", &movies))))
    }

    pub async fn director_details(&self, id: DirectorId) -> Result<Option<String>, CatalogError> {
        let Some(director) = self.directors.find_by_id(id).await? else {
            return Ok(None);
        };
        let movies = self.directed_movies(id).await?;
        Ok(Some(format!(
            "{}\n{}",
            director.describe(),
            movie_list("Directed movies", &movies)
        )))
    }

    pub async fn movie_details(&self, id: MovieId) -> Result<Option<String>, CatalogError> {
        let Some(movie) = self.movies.find_by_id(id).await? else {
            return Ok(None);
        };
        let cast = self.cast_of(id).await?;
        Ok(Some(format!("{}\n{}", movie.describe(), cast_list(&cast))))
    }

    // --- Cascading removals ---

    /// Removes the actor and every casting that references them.
    #[instrument(skip(self))]
    pub async fn remove_actor(&self, id: ActorId) -> Result<bool, CatalogError> {
        let _guard = self.associations.lock().await;
        let unlinked = self.castings.remove_actor(id).await?;
        let removed = self.actors.remove(id).await?;
        info!(%id, unlinked, removed, "Actor removal");
        Ok(removed)
    }

    /// Removes the movie and its whole cast list.
    #[instrument(skip(self))]
    pub async fn remove_movie(&self, id: MovieId) -> Result<bool, CatalogError> {
        let _guard = self.associations.lock().await;
        let unlinked = self.castings.remove_movie(id).await?;
        let removed = self.movies.remove(id).await?;
        info!(%id, unlinked, removed, "Movie removal");
        Ok(removed)
    }

    /// Removes the director after clearing them from every movie they directed.
    #[instrument(skip(self))]
    pub async fn remove_director(&self, id: DirectorId) -> Result<bool, CatalogError> {
        let _guard = self.associations.lock().await;
        let directed = self.movies.find_by_director(id).await?;
        for movie in &directed {
            self.movies.clear_director(movie.id).await?;
        }
        let removed = self.directors.remove(id).await?;
        info!(%id, cleared = directed.len(), removed, "Director removal");
        Ok(removed)
    }

    /// Gracefully shuts down every service.
    ///
    /// Dropping the clients closes the channels; services holding clones in their context
    /// stop once their own channel closes, which releases those clones in turn.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down catalog...");

        drop(self.castings);
        drop(self.movies);
        drop(self.directors);
        drop(self.actors);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Service task failed: {:?}", e);
                return Err(format!("Service task failed: {:?}", e));
            }
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}
