//! Text blocks for the derived views shown next to a record's own description.

use super::casting::CastMember;
use super::movie::Movie;
use chrono::Datelike;

/// Numbered list of movies with their release year, e.g. `  1. Titanic (1997)`.
pub fn movie_list(heading: &str, movies: &[Movie]) -> String {
    if movies.is_empty() {
        return format!("{heading}: none");
    }
    let mut text = format!("{heading}:");
    for (position, movie) in movies.iter().enumerate() {
        text.push_str(&format!(
            "\n  {}. {} ({})",
            position + 1,
            movie.name(),
            movie.release_date().year()
        ));
    }
    text
}

/// Numbered cast list, e.g. `  1. Kate Winslet as Rose`.
pub fn cast_list(cast: &[CastMember]) -> String {
    if cast.is_empty() {
        return "Cast: none".to_string();
    }
    let mut text = String::from("Cast:");
    for (position, member) in cast.iter().enumerate() {
        text.push_str(&format!("\n  {}. {}", position + 1, member.actor.profile.name()));
        if let Some(character) = &member.character {
            text.push_str(&format!(" as {character}"));
        }
    }
    text
}
