//! # Movie Catalog Console
//!
//! Numbered menu over the [`CatalogController`]. Every answer is printed as the
//! operation's `SUCCESS - ...` / `ERROR - ...` line, followed by the record text where one
//! applies. Data lives only for the duration of the process.
//!
//! ```bash
//! RUST_LOG=info cargo run -p movie-catalog
//! CATALOG_CHANNEL_CAPACITY=8 cargo run -p movie-catalog
//! ```

use chrono::NaiveDate;
use movie_catalog::config::CatalogConfig;
use movie_catalog::controller::CatalogController;
use movie_catalog::lifecycle::{setup_tracing, CatalogSystem};
use movie_catalog::model::{
    ActorCreate, ActorId, DirectorCreate, DirectorId, MovieCreate, MovieId, Person,
};
use movie_catalog::outcome::OperationResult;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::info;

const MENU: &str = "\
=== Movie Catalog ===
1. Register actor
2. Register director
3. Register movie
4. List records
5. Find by name
6. Edit record
7. Remove record
8. Manage associations
9. Show details
0. Exit";

#[derive(Debug, Clone, Copy)]
enum Kind {
    Actor,
    Director,
    Movie,
}

struct Console {
    lines: Lines<BufReader<Stdin>>,
    catalog: CatalogController,
}

fn show<T>(result: &OperationResult<T>) {
    println!("{result}");
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
        .ok()
}

impl Console {
    /// Prints `label` and reads one trimmed line. `None` once stdin is exhausted.
    async fn ask(&mut self, label: &str) -> Result<Option<String>, String> {
        print!("{label}: ");
        std::io::stdout().flush().map_err(|e| e.to_string())?;
        let line = self.lines.next_line().await.map_err(|e| e.to_string())?;
        Ok(line.map(|l| l.trim().to_string()))
    }

    async fn ask_optional(&mut self, label: &str) -> Result<Option<String>, String> {
        Ok(self.ask(label).await?.filter(|v| !v.is_empty()))
    }

    async fn ask_id(&mut self, label: &str) -> Result<Option<u64>, String> {
        let Some(raw) = self.ask(label).await? else {
            return Ok(None);
        };
        match raw.parse::<u64>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                println!("ERROR - '{raw}' is not a numeric id");
                Ok(None)
            }
        }
    }

    async fn ask_age(&mut self, label: &str) -> Result<Result<Option<i32>, String>, String> {
        Ok(match self.ask_optional(label).await? {
            None => Ok(None),
            Some(raw) => raw
                .parse::<i32>()
                .map(Some)
                .map_err(|_| format!("'{raw}' is not a valid age")),
        })
    }

    async fn ask_kind(&mut self) -> Result<Option<Kind>, String> {
        let choice = self.ask("Record type (1 actor, 2 director, 3 movie)").await?;
        Ok(match choice.as_deref() {
            Some("1") => Some(Kind::Actor),
            Some("2") => Some(Kind::Director),
            Some("3") => Some(Kind::Movie),
            _ => {
                println!("ERROR - unknown record type");
                None
            }
        })
    }

    async fn run(&mut self) -> Result<(), String> {
        loop {
            println!("\n{MENU}");
            let Some(choice) = self.ask("Choose an option").await? else {
                return Ok(());
            };
            match choice.as_str() {
                "1" => self.register_actor().await?,
                "2" => self.register_director().await?,
                "3" => self.register_movie().await?,
                "4" => self.list().await?,
                "5" => self.find().await?,
                "6" => self.edit().await?,
                "7" => self.remove().await?,
                "8" => self.associations().await?,
                "9" => self.details().await?,
                "0" => return Ok(()),
                other => println!("ERROR - unknown option '{other}'"),
            }
        }
    }

    async fn register_actor(&mut self) -> Result<(), String> {
        let name = self.ask("Name").await?.unwrap_or_default();
        let age = match self.ask_age("Age (blank if unknown)").await? {
            Ok(age) => age,
            Err(message) => {
                println!("ERROR - {message}");
                return Ok(());
            }
        };
        let nationality = self.ask_optional("Nationality").await?;
        let params = ActorCreate {
            name,
            age,
            nationality,
        };
        show(&self.catalog.register_actor(params).await);
        Ok(())
    }

    async fn register_director(&mut self) -> Result<(), String> {
        let name = self.ask("Name").await?.unwrap_or_default();
        let age = match self.ask_age("Age (blank if unknown)").await? {
            Ok(age) => age,
            Err(message) => {
                println!("ERROR - {message}");
                return Ok(());
            }
        };
        let nationality = self.ask_optional("Nationality").await?;
        let style = self.ask_optional("Style").await?;
        let params = DirectorCreate {
            name,
            age,
            nationality,
            style,
        };
        show(&self.catalog.register_director(params).await);
        Ok(())
    }

    async fn register_movie(&mut self) -> Result<(), String> {
        let name = self.ask("Name").await?.unwrap_or_default();
        let raw_date = self.ask("Release date (YYYY-MM-DD)").await?.unwrap_or_default();
        let Some(release_date) = parse_date(&raw_date) else {
            println!("ERROR - '{raw_date}' is not a valid date");
            return Ok(());
        };
        let mut params = MovieCreate::new(name, release_date);
        if let Some(raw) = self.ask_optional("Budget (blank if unknown)").await? {
            match raw.parse::<f64>() {
                Ok(budget) => params.budget = Some(budget),
                Err(_) => {
                    println!("ERROR - '{raw}' is not a valid budget");
                    return Ok(());
                }
            }
        }
        params.description = self.ask_optional("Description").await?;
        show(&self.catalog.register_movie(params).await);
        Ok(())
    }

    async fn list(&mut self) -> Result<(), String> {
        let Some(kind) = self.ask_kind().await? else {
            return Ok(());
        };
        match kind {
            Kind::Actor => {
                let result = self.catalog.list_actors().await;
                show(&result);
                for actor in result.payload().into_iter().flatten() {
                    println!("  {} - {}", actor.id, actor.name());
                }
            }
            Kind::Director => {
                let result = self.catalog.list_directors().await;
                show(&result);
                for director in result.payload().into_iter().flatten() {
                    println!("  {} - {}", director.id, director.name());
                }
            }
            Kind::Movie => {
                let order = self
                    .ask("Order (1 registration, 2 name, 3 release date)")
                    .await?;
                let result = match order.as_deref() {
                    Some("2") => self.catalog.list_movies_by_name().await,
                    Some("3") => self.catalog.list_movies_by_release_date().await,
                    _ => self.catalog.list_movies().await,
                };
                show(&result);
                for movie in result.payload().into_iter().flatten() {
                    println!("  {} - {} ({})", movie.id, movie.name(), movie.release_date());
                }
            }
        }
        Ok(())
    }

    async fn find(&mut self) -> Result<(), String> {
        let Some(kind) = self.ask_kind().await? else {
            return Ok(());
        };
        let query = self.ask("Name or part of it").await?.unwrap_or_default();
        match kind {
            Kind::Actor => {
                let result = self.catalog.search_actors(&query).await;
                show(&result);
                for actor in result.payload().into_iter().flatten() {
                    println!("  {} - {}", actor.id, actor.name());
                }
            }
            Kind::Director => {
                let result = self.catalog.search_directors(&query).await;
                show(&result);
                for director in result.payload().into_iter().flatten() {
                    println!("  {} - {}", director.id, director.name());
                }
            }
            Kind::Movie => {
                let result = self.catalog.search_movies(&query).await;
                show(&result);
                for movie in result.payload().into_iter().flatten() {
                    println!("  {} - {}", movie.id, movie.name());
                }
            }
        }
        Ok(())
    }

    async fn edit(&mut self) -> Result<(), String> {
        let Some(kind) = self.ask_kind().await? else {
            return Ok(());
        };
        let Some(id) = self.ask_id("Id").await? else {
            return Ok(());
        };
        println!("Leave a field blank to keep it.");
        match kind {
            Kind::Actor => {
                let found = self.catalog.find_actor(ActorId(id)).await;
                let Some(mut actor) = found.into_payload() else {
                    println!("ERROR - Actor not found: {}", ActorId(id));
                    return Ok(());
                };
                if let Some(name) = self.ask_optional("Name").await? {
                    if let Err(e) = actor.profile.set_name(&name) {
                        println!("ERROR - {e}");
                        return Ok(());
                    }
                }
                match self.ask_age("Age").await? {
                    Ok(Some(age)) => {
                        if let Err(e) = actor.profile.set_age(Some(age)) {
                            println!("ERROR - {e}");
                            return Ok(());
                        }
                    }
                    Ok(None) => {}
                    Err(message) => {
                        println!("ERROR - {message}");
                        return Ok(());
                    }
                }
                if let Some(nationality) = self.ask_optional("Nationality").await? {
                    actor.profile.set_nationality(Some(&nationality));
                }
                show(&self.catalog.update_actor(&actor).await);
            }
            Kind::Director => {
                let found = self.catalog.find_director(DirectorId(id)).await;
                let Some(mut director) = found.into_payload() else {
                    println!("ERROR - Director not found: {}", DirectorId(id));
                    return Ok(());
                };
                if let Some(name) = self.ask_optional("Name").await? {
                    if let Err(e) = director.profile.set_name(&name) {
                        println!("ERROR - {e}");
                        return Ok(());
                    }
                }
                match self.ask_age("Age").await? {
                    Ok(Some(age)) => {
                        if let Err(e) = director.profile.set_age(Some(age)) {
                            println!("ERROR - {e}");
                            return Ok(());
                        }
                    }
                    Ok(None) => {}
                    Err(message) => {
                        println!("ERROR - {message}");
                        return Ok(());
                    }
                }
                if let Some(nationality) = self.ask_optional("Nationality").await? {
                    director.profile.set_nationality(Some(&nationality));
                }
                if let Some(style) = self.ask_optional("Style").await? {
                    director.set_style(Some(&style));
                }
                show(&self.catalog.update_director(&director).await);
            }
            Kind::Movie => {
                let found = self.catalog.find_movie(MovieId(id)).await;
                let Some(mut movie) = found.into_payload() else {
                    println!("ERROR - Movie not found: {}", MovieId(id));
                    return Ok(());
                };
                if let Some(name) = self.ask_optional("Name").await? {
                    if let Err(e) = movie.set_name(&name) {
                        println!("ERROR - {e}");
                        return Ok(());
                    }
                }
                if let Some(raw) = self.ask_optional("Release date (YYYY-MM-DD)").await? {
                    let outcome = match parse_date(&raw) {
                        Some(date) => movie.set_release_date(date).map_err(|e| e.to_string()),
                        None => Err(format!("'{raw}' is not a valid date")),
                    };
                    if let Err(message) = outcome {
                        println!("ERROR - {message}");
                        return Ok(());
                    }
                }
                if let Some(raw) = self.ask_optional("Budget").await? {
                    let outcome = match raw.parse::<f64>() {
                        Ok(budget) => movie.set_budget(Some(budget)).map_err(|e| e.to_string()),
                        Err(_) => Err(format!("'{raw}' is not a valid budget")),
                    };
                    if let Err(message) = outcome {
                        println!("ERROR - {message}");
                        return Ok(());
                    }
                }
                if let Some(description) = self.ask_optional("Description").await? {
                    movie.set_description(Some(&description));
                }
                show(&self.catalog.update_movie(&movie).await);
            }
        }
        Ok(())
    }

    async fn remove(&mut self) -> Result<(), String> {
        let Some(kind) = self.ask_kind().await? else {
            return Ok(());
        };
        let Some(id) = self.ask_id("Id").await? else {
            return Ok(());
        };
        match kind {
            Kind::Actor => show(&self.catalog.remove_actor(ActorId(id)).await),
            Kind::Director => show(&self.catalog.remove_director(DirectorId(id)).await),
            Kind::Movie => show(&self.catalog.remove_movie(MovieId(id)).await),
        }
        Ok(())
    }

    async fn associations(&mut self) -> Result<(), String> {
        println!("1. Add actor to movie\n2. Remove actor from movie\n3. Change character\n4. Assign director\n5. Clear director");
        let choice = self.ask("Choose an option").await?.unwrap_or_default();
        let Some(movie) = self.ask_id("Movie id").await? else {
            return Ok(());
        };
        let movie = MovieId(movie);
        match choice.as_str() {
            "1" | "2" | "3" => {
                let Some(actor) = self.ask_id("Actor id").await? else {
                    return Ok(());
                };
                let actor = ActorId(actor);
                match choice.as_str() {
                    "1" => {
                        let character = self.ask_optional("Character (optional)").await?;
                        show(&self.catalog.cast(movie, actor, character).await);
                    }
                    "2" => show(&self.catalog.uncast(movie, actor).await),
                    _ => {
                        let character = self.ask_optional("Character (blank clears)").await?;
                        show(&self.catalog.set_character(movie, actor, character).await);
                    }
                }
            }
            "4" => {
                let Some(director) = self.ask_id("Director id").await? else {
                    return Ok(());
                };
                show(&self.catalog.assign_director(movie, DirectorId(director)).await);
            }
            "5" => show(&self.catalog.clear_director(movie).await),
            other => println!("ERROR - unknown option '{other}'"),
        }
        Ok(())
    }

    async fn details(&mut self) -> Result<(), String> {
        let Some(kind) = self.ask_kind().await? else {
            return Ok(());
        };
        let Some(id) = self.ask_id("Id").await? else {
            return Ok(());
        };
        let result = match kind {
            Kind::Actor => self.catalog.actor_details(ActorId(id)).await,
            Kind::Director => self.catalog.director_details(DirectorId(id)).await,
            Kind::Movie => self.catalog.movie_details(MovieId(id)).await,
        };
        match result.payload() {
            Some(text) => println!("{text}"),
            None => show(&result),
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = CatalogConfig::from_env();
    info!(?config, "Starting movie catalog");

    let mut console = Console {
        lines: BufReader::new(tokio::io::stdin()).lines(),
        catalog: CatalogController::new(CatalogSystem::with_config(&config)),
    };
    let outcome = console.run().await;

    console.catalog.shutdown().await?;
    println!("Bye.");
    outcome
}
