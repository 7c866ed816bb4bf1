use chrono::{Duration, Local, NaiveDate};
use movie_catalog::error::CatalogError;
use movie_catalog::lifecycle::CatalogSystem;
use movie_catalog::model::{
    ActorCreate, ActorId, DirectorCreate, DirectorId, MovieCreate, MovieId, Person,
};
use resource_framework::ServiceClient;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn cameron() -> DirectorCreate {
    DirectorCreate::new("James Cameron")
        .age(70)
        .nationality("Canadian")
        .style("Epic")
}

async fn titanic(system: &CatalogSystem) -> MovieId {
    system
        .movies
        .register_movie(MovieCreate::new("Titanic", date(1997, 12, 19)).budget(200_000_000.0))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_actor_with_only_a_name_and_duplicate_names() {
    let system = CatalogSystem::new();

    let first = system
        .actors
        .register_actor(ActorCreate::new("Tom Hanks"))
        .await
        .unwrap();
    let second = system
        .actors
        .register_actor(ActorCreate::new("Tom Hanks"))
        .await
        .unwrap();

    assert!(first.value() > 0);
    assert_ne!(first, second);
    assert_eq!(system.actors.count().await.unwrap(), 2);

    let found = system.actors.find_by_name("Tom Hanks").await.unwrap().unwrap();
    assert_eq!(found.id, first);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_movie_names_are_unique_ignoring_case() {
    let system = CatalogSystem::new();
    titanic(&system).await;

    let result = system
        .movies
        .register_movie(MovieCreate::new("titanic", date(2012, 4, 4)))
        .await;
    assert!(matches!(result, Err(CatalogError::Conflict(_))));
    assert_eq!(system.movies.count().await.unwrap(), 1);

    let matches = system.movies.find_by_name("TITANIC").await.unwrap();
    assert_eq!(matches.len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_future_release_date_is_rejected() {
    let system = CatalogSystem::new();
    let tomorrow = Local::now().date_naive() + Duration::days(1);

    let result = system
        .movies
        .register_movie(MovieCreate::new("Avatar 9", tomorrow))
        .await;
    assert!(matches!(result, Err(CatalogError::InvalidArgument(_))));
    assert_eq!(system.movies.count().await.unwrap(), 0);

    // The failed registration did not use up an id.
    assert_eq!(titanic(&system).await, MovieId(1));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_casting_twice_keeps_a_single_link() {
    let system = CatalogSystem::new();
    let movie = titanic(&system).await;
    let actor = system
        .actors
        .register_actor(ActorCreate::new("Leonardo DiCaprio"))
        .await
        .unwrap();

    system.cast(movie, actor, Some("Jack".into())).await.unwrap();
    let again = system.cast(movie, actor, None).await;
    assert!(matches!(again, Err(CatalogError::DuplicateAssociation(_))));

    let filmography = system.filmography(actor).await.unwrap();
    assert_eq!(filmography.len(), 1);
    assert_eq!(filmography[0].id, movie);

    let cast = system.cast_of(movie).await.unwrap();
    assert_eq!(cast.len(), 1);
    assert_eq!(cast[0].character.as_deref(), Some("Jack"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cast_then_uncast_clears_both_views() {
    let system = CatalogSystem::new();
    let movie = titanic(&system).await;
    let actor = system
        .actors
        .register_actor(ActorCreate::new("Kate Winslet"))
        .await
        .unwrap();

    system.cast(movie, actor, None).await.unwrap();
    system.uncast(movie, actor).await.unwrap();

    assert!(system.filmography(actor).await.unwrap().is_empty());
    assert!(system.cast_of(movie).await.unwrap().is_empty());
    assert!(matches!(
        system.uncast(movie, actor).await,
        Err(CatalogError::NotFound { .. })
    ));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cast_requires_both_sides() {
    let system = CatalogSystem::new();
    let movie = titanic(&system).await;

    assert_eq!(
        system.cast(movie, ActorId(5), None).await,
        Err(CatalogError::not_found("Actor", ActorId(5)))
    );
    assert_eq!(
        system.cast(MovieId(9), ActorId(5), None).await,
        Err(CatalogError::not_found("Movie", MovieId(9)))
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_set_character_updates_the_link() {
    let system = CatalogSystem::new();
    let movie = titanic(&system).await;
    let actor = system
        .actors
        .register_actor(ActorCreate::new("Billy Zane"))
        .await
        .unwrap();
    system.cast(movie, actor, None).await.unwrap();

    let casting = system
        .set_character(movie, actor, Some("Cal Hockley".into()))
        .await
        .unwrap();
    assert_eq!(casting.character(), Some("Cal Hockley"));

    let cast = system.cast_of(movie).await.unwrap();
    assert_eq!(cast[0].character.as_deref(), Some("Cal Hockley"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_lookups_on_empty_stores() {
    let system = CatalogSystem::new();

    assert!(system.actors.find_by_id(ActorId(1)).await.unwrap().is_none());
    assert!(system.movies.find_by_id(MovieId(42)).await.unwrap().is_none());
    assert!(system.actors.list_all().await.unwrap().is_empty());
    assert!(system.directors.list_all().await.unwrap().is_empty());
    assert!(system.movies.list_all().await.unwrap().is_empty());
    assert!(system.actors.find_by_name("Nobody").await.unwrap().is_none());
    assert!(system.actors.find_by_name_partial("  ").await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_remove_actor_and_unknown_id() {
    let system = CatalogSystem::new();
    let actor = system
        .actors
        .register_actor(ActorCreate::new("Gloria Stuart"))
        .await
        .unwrap();

    assert!(system.remove_actor(actor).await.unwrap());
    assert!(system.actors.find_by_id(actor).await.unwrap().is_none());
    assert!(!system.remove_actor(ActorId(99)).await.unwrap());
    assert_eq!(system.actors.count().await.unwrap(), 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_validation_rules() {
    let system = CatalogSystem::new();

    let kid = system
        .actors
        .register_actor(ActorCreate::new("Kid").age(17).nationality("American"))
        .await
        .unwrap();
    let kid = system.actors.find_by_id(kid).await.unwrap().unwrap();
    assert!(!kid.validate());

    let styleless = system
        .directors
        .register_director(DirectorCreate::new("Anon").age(40).nationality("French"))
        .await;
    assert_eq!(
        styleless,
        Err(CatalogError::invalid("director style is required"))
    );

    let blank = system.actors.register_actor(ActorCreate::new("   ")).await;
    assert!(matches!(blank, Err(CatalogError::InvalidArgument(_))));

    let negative = system
        .actors
        .register_actor(ActorCreate::new("Minus").age(-1))
        .await;
    assert!(matches!(negative, Err(CatalogError::InvalidArgument(_))));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_director_assignment() {
    let system = CatalogSystem::new();
    let movie = titanic(&system).await;
    let director = system.directors.register_director(cameron()).await.unwrap();

    assert!(matches!(
        system.assign_director(movie, DirectorId(8)).await,
        Err(CatalogError::NotFound { entity: "Director", .. })
    ));

    system.assign_director(movie, director).await.unwrap();
    assert!(matches!(
        system.assign_director(movie, director).await,
        Err(CatalogError::DuplicateAssociation(_))
    ));

    let directed = system.directed_movies(director).await.unwrap();
    assert_eq!(directed.len(), 1);
    assert_eq!(directed[0].director(), Some(director));

    assert_eq!(system.clear_director(movie).await.unwrap(), director);
    assert!(matches!(
        system.clear_director(movie).await,
        Err(CatalogError::NotFound { .. })
    ));
    assert!(system.directed_movies(director).await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_movie_with_unknown_director_is_rejected() {
    let system = CatalogSystem::new();

    let result = system
        .movies
        .register_movie(MovieCreate::new("Orphan", date(2009, 7, 24)).director(DirectorId(3)))
        .await;
    assert_eq!(result, Err(CatalogError::not_found("Director", DirectorId(3))));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_failed_update_leaves_record_unchanged() {
    let system = CatalogSystem::new();
    let movie_id = titanic(&system).await;
    system
        .movies
        .register_movie(MovieCreate::new("The Abyss", date(1989, 8, 9)))
        .await
        .unwrap();

    let mut movie = system.movies.find_by_id(movie_id).await.unwrap().unwrap();
    movie.set_name("the abyss").unwrap();
    movie.set_budget(Some(1.0)).unwrap();
    assert!(matches!(
        system.movies.update_movie(&movie).await,
        Err(CatalogError::Conflict(_))
    ));

    let stored = system.movies.find_by_id(movie_id).await.unwrap().unwrap();
    assert_eq!(stored.name(), "Titanic");
    assert_eq!(stored.budget(), Some(200_000_000.0));

    let director = system.directors.register_director(cameron()).await.unwrap();
    let mut stored = system.directors.find_by_id(director).await.unwrap().unwrap();
    stored.set_style(None);
    assert!(system.directors.update_director(&stored).await.is_err());
    let unchanged = system.directors.find_by_id(director).await.unwrap().unwrap();
    assert_eq!(unchanged.style(), Some("Epic"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_replaces_fields() {
    let system = CatalogSystem::new();
    let id = system
        .actors
        .register_actor(ActorCreate::new("Frances Fisher"))
        .await
        .unwrap();

    let mut actor = system.actors.find_by_id(id).await.unwrap().unwrap();
    actor.profile.set_age(Some(71)).unwrap();
    actor.profile.set_nationality(Some("British"));
    let updated = system.actors.update_actor(&actor).await.unwrap();
    assert!(updated.validate());
    assert_eq!(
        system.actors.find_by_id(id).await.unwrap().unwrap().profile.age(),
        Some(71)
    );

    let mut ghost = actor.clone();
    ghost.id = ActorId(500);
    assert!(matches!(
        system.actors.update_actor(&ghost).await,
        Err(CatalogError::NotFound { .. })
    ));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_removal_cascades() {
    let system = CatalogSystem::new();
    let titanic = titanic(&system).await;
    let abyss = system
        .movies
        .register_movie(MovieCreate::new("The Abyss", date(1989, 8, 9)))
        .await
        .unwrap();
    let kate = system
        .actors
        .register_actor(ActorCreate::new("Kate Winslet"))
        .await
        .unwrap();
    let ed = system
        .actors
        .register_actor(ActorCreate::new("Ed Harris"))
        .await
        .unwrap();
    let director = system.directors.register_director(cameron()).await.unwrap();

    system.cast(titanic, kate, None).await.unwrap();
    system.cast(abyss, ed, None).await.unwrap();
    system.cast(abyss, kate, None).await.unwrap();
    system.assign_director(titanic, director).await.unwrap();
    system.assign_director(abyss, director).await.unwrap();

    // Removing a movie drops it from every filmography.
    assert!(system.remove_movie(abyss).await.unwrap());
    assert!(system.filmography(ed).await.unwrap().is_empty());
    let kate_movies = system.filmography(kate).await.unwrap();
    assert_eq!(kate_movies.len(), 1);
    assert_eq!(kate_movies[0].id, titanic);

    // Removing an actor drops them from every cast.
    assert!(system.remove_actor(kate).await.unwrap());
    assert!(system.cast_of(titanic).await.unwrap().is_empty());
    assert_eq!(system.castings.count().await.unwrap(), 0);

    // Removing a director clears the reference on their movies.
    assert!(system.remove_director(director).await.unwrap());
    let movie = system.movies.find_by_id(titanic).await.unwrap().unwrap();
    assert_eq!(movie.director(), None);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_queries_and_details() {
    let system = CatalogSystem::new();
    let titanic = titanic(&system).await;
    system
        .movies
        .register_movie(MovieCreate::new("Aliens", date(1986, 7, 18)))
        .await
        .unwrap();
    let kate = system
        .actors
        .register_actor(ActorCreate::new("Kate Winslet").nationality("British"))
        .await
        .unwrap();
    system.cast(titanic, kate, Some("Rose".into())).await.unwrap();

    let partial = system.movies.find_by_name_partial("ALIEN").await.unwrap();
    assert_eq!(partial.len(), 1);
    assert_eq!(partial[0].name(), "Aliens");

    let by_name: Vec<String> = system
        .movies
        .list_sorted_by_name()
        .await
        .unwrap()
        .iter()
        .map(|m| m.name().to_string())
        .collect();
    assert_eq!(by_name, vec!["Aliens", "Titanic"]);

    let actors = system.actors.find_by_name_partial("winslet").await.unwrap();
    assert_eq!(actors.len(), 1);

    let details = system.actor_details(kate).await.unwrap().unwrap();
    assert!(details.contains("Name: Kate Winslet"));
    assert!(details.contains("1. Titanic (1997)"));

    let movie_text = system.movie_details(titanic).await.unwrap().unwrap();
    assert!(movie_text.contains("Kate Winslet as Rose"));

    assert!(system.director_details(DirectorId(1)).await.unwrap().is_none());

    system.shutdown().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_cast_racing_actor_removal_leaves_no_link() {
    let system = CatalogSystem::new();
    let movie = titanic(&system).await;

    for round in 0..20 {
        let actor = system
            .actors
            .register_actor(ActorCreate::new(format!("Extra {round}")))
            .await
            .unwrap();

        let (removed, cast) =
            tokio::join!(system.remove_actor(actor), system.cast(movie, actor, None));

        assert_eq!(removed, Ok(true));
        if let Err(e) = cast {
            assert_eq!(e, CatalogError::not_found("Actor", actor));
        }
        assert_eq!(system.actors.find_by_id(actor).await.unwrap(), None);
        assert!(system.castings.for_actor(actor).await.unwrap().is_empty());
    }
    assert!(system.cast_of(movie).await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_director_assignment_racing_removal_leaves_no_reference() {
    let system = CatalogSystem::new();
    let movie = titanic(&system).await;

    for _ in 0..20 {
        let director = system
            .directors
            .register_director(cameron())
            .await
            .unwrap();

        let (removed, assigned) = tokio::join!(
            system.remove_director(director),
            system.assign_director(movie, director)
        );

        assert_eq!(removed, Ok(true));
        if let Err(e) = assigned {
            assert_eq!(e, CatalogError::not_found("Director", director));
        }
        assert_eq!(system.directors.find_by_id(director).await.unwrap(), None);
        let stored = system.movies.find_by_id(movie).await.unwrap().unwrap();
        assert_eq!(stored.director(), None);
    }

    system.shutdown().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_cast_racing_movie_removal_leaves_no_link() {
    let system = CatalogSystem::new();
    let actor = system
        .actors
        .register_actor(ActorCreate::new("Kate Winslet"))
        .await
        .unwrap();

    for round in 0..20 {
        let movie = system
            .movies
            .register_movie(MovieCreate::new(format!("Sequel {round}"), date(2001, 1, 1)))
            .await
            .unwrap();

        let (removed, cast) =
            tokio::join!(system.remove_movie(movie), system.cast(movie, actor, None));

        assert_eq!(removed, Ok(true));
        if let Err(e) = cast {
            assert_eq!(e, CatalogError::not_found("Movie", movie));
        }
        assert!(system.castings.for_movie(movie).await.unwrap().is_empty());
    }
    assert!(system.filmography(actor).await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}
