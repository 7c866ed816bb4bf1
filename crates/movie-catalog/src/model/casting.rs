use super::actor::Actor;
use super::ids::{ActorId, CastingId, MovieId};
use super::person::optional_text;
use serde::Serialize;

/// Join record linking an actor to a movie, with the character they play.
///
/// The casting table is the only place the movie/actor relation is stored, so a movie's
/// cast and an actor's filmography can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Casting {
    pub id: CastingId,
    pub movie_id: MovieId,
    pub actor_id: ActorId,
    character: Option<String>,
}

/// Payload for linking an actor to a movie.
#[derive(Debug, Clone)]
pub struct CastingCreate {
    pub movie_id: MovieId,
    pub actor_id: ActorId,
    pub character: Option<String>,
}

/// New character for an existing link. `None` clears it.
#[derive(Debug, Clone)]
pub struct CastingUpdate {
    pub character: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastingFilter {
    Movie(MovieId),
    Actor(ActorId),
    Pair(MovieId, ActorId),
}

impl Casting {
    pub fn new(id: CastingId, params: CastingCreate) -> Self {
        Self {
            id,
            movie_id: params.movie_id,
            actor_id: params.actor_id,
            character: optional_text(params.character.as_deref()),
        }
    }

    pub fn character(&self) -> Option<&str> {
        self.character.as_deref()
    }

    pub fn set_character(&mut self, character: Option<&str>) {
        self.character = optional_text(character);
    }

    /// Key shared by every casting of the same (movie, actor) pair.
    pub fn pair_key(&self) -> String {
        format!("{}:{}", self.movie_id, self.actor_id)
    }

    pub fn matches_filter(&self, filter: &CastingFilter) -> bool {
        match *filter {
            CastingFilter::Movie(movie) => self.movie_id == movie,
            CastingFilter::Actor(actor) => self.actor_id == actor,
            CastingFilter::Pair(movie, actor) => self.movie_id == movie && self.actor_id == actor,
        }
    }
}

/// One entry of a movie's cast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CastMember {
    pub actor: Actor,
    pub character: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn casting(movie: u64, actor: u64) -> Casting {
        Casting::new(
            CastingId(1),
            CastingCreate {
                movie_id: MovieId(movie),
                actor_id: ActorId(actor),
                character: Some("  Jack Dawson ".into()),
            },
        )
    }

    #[test]
    fn character_is_trimmed() {
        let mut c = casting(1, 2);
        assert_eq!(c.character(), Some("Jack Dawson"));
        c.set_character(Some(""));
        assert_eq!(c.character(), None);
    }

    #[test]
    fn pair_key_and_filters() {
        let c = casting(1, 2);
        assert_eq!(c.pair_key(), "movie_1:actor_2");
        assert!(c.matches_filter(&CastingFilter::Movie(MovieId(1))));
        assert!(c.matches_filter(&CastingFilter::Actor(ActorId(2))));
        assert!(c.matches_filter(&CastingFilter::Pair(MovieId(1), ActorId(2))));
        assert!(!c.matches_filter(&CastingFilter::Pair(MovieId(2), ActorId(1))));
    }
}
