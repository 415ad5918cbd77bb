//! Mutating operations for people, movies, and castings.
//!
//! Referential integrity is left to SQLite: inserting a movie whose director
//! does not exist, or a casting for an unknown movie or actor, fails with a
//! foreign key error.

use cinedex_catalog::types::*;
use rusqlite::{params, Connection};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Entity not found: {entity_type} with id '{id}'")]
    NotFound { entity_type: String, id: String },
}

// ── Person Operations ───────────────────────────────────────────────────────

/// Insert a new person. Fails if the name is already taken.
pub fn insert_person(conn: &Connection, person: &Person) -> Result<(), StoreError> {
    conn.execute(
        "INSERT INTO people (name, nationality) VALUES (?1, ?2)",
        params![person.name, person.nationality],
    )?;
    Ok(())
}

/// Delete a person by name.
///
/// Remaining castings for the person are removed by the cascade; a person
/// who still directs a movie is rejected by the foreign key.
pub fn delete_person(conn: &Connection, name: &str) -> Result<(), StoreError> {
    let changed = conn.execute("DELETE FROM people WHERE name = ?1", params![name])?;
    if changed == 0 {
        return Err(StoreError::NotFound {
            entity_type: "person".to_string(),
            id: name.to_string(),
        });
    }
    Ok(())
}

// ── Movie Operations ────────────────────────────────────────────────────────

/// Insert a new movie. Returns the generated ID.
pub fn insert_movie(conn: &Connection, movie: &NewMovie) -> Result<i64, StoreError> {
    conn.execute(
        "INSERT INTO movies (title, director_name, length_in_seconds) VALUES (?1, ?2, ?3)",
        params![movie.title, movie.director_name, movie.length_in_seconds],
    )?;
    Ok(conn.last_insert_rowid())
}

// ── Casting Operations ──────────────────────────────────────────────────────

/// Record that an actor appears in a movie.
///
/// Casting the same actor twice is a no-op. Returns whether a row was added.
pub fn insert_casting(conn: &Connection, casting: &Casting) -> Result<bool, StoreError> {
    let changed = conn.execute(
        "INSERT OR IGNORE INTO castings (movie_id, actor_name) VALUES (?1, ?2)",
        params![casting.movie_id, casting.actor_name],
    )?;
    Ok(changed > 0)
}

/// Remove every casting for an actor. Returns the number of rows deleted.
pub fn delete_castings_for_actor(conn: &Connection, actor_name: &str) -> Result<usize, StoreError> {
    let deleted = conn.execute(
        "DELETE FROM castings WHERE actor_name = ?1",
        params![actor_name],
    )?;
    Ok(deleted)
}
