//! SQLite schema creation and versioning.
//!
//! Each entry of [`MIGRATIONS`] brings the schema up by one version; the
//! version reached is recorded in `schema_version`. Opening a database that
//! was written by a newer build fails instead of guessing at its layout.

use std::path::Path;

use rusqlite::Connection;
use thiserror::Error;

use crate::functions::register_functions;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Unsupported schema: expected version {expected}, found {found}")]
    VersionMismatch { expected: i32, found: i32 },
}

/// Migration scripts, indexed by the version they produce minus one.
const MIGRATIONS: &[&str] = &[V1_CATALOG];

/// Schema version written by this build.
pub const CURRENT_VERSION: i32 = MIGRATIONS.len() as i32;

/// Bring a connection's schema up to [`CURRENT_VERSION`].
///
/// Safe to call repeatedly: migrations that already ran are skipped.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(VERSION_TABLE)?;
    let found = stored_version(conn)?;
    if found > CURRENT_VERSION {
        return Err(SchemaError::VersionMismatch {
            expected: CURRENT_VERSION,
            found,
        });
    }

    for (version, sql) in (1..).zip(MIGRATIONS).skip(found as usize) {
        log::debug!("Applying catalog schema version {}", version);
        conn.execute_batch(sql)?;
        conn.execute("INSERT INTO schema_version (version) VALUES (?1)", [version])?;
    }
    Ok(())
}

/// Open or create a catalog database file.
pub fn open_database(path: &Path) -> Result<Connection, SchemaError> {
    let conn = Connection::open(path)?;
    conn.pragma_update(None, "journal_mode", "WAL")?;
    prepare(&conn)?;
    Ok(conn)
}

/// Open a fresh in-memory catalog.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    prepare(&conn)?;
    Ok(conn)
}

/// Settings every catalog connection needs, then the schema itself.
fn prepare(conn: &Connection) -> Result<(), SchemaError> {
    conn.pragma_update(None, "foreign_keys", true)?;
    register_functions(conn)?;
    create_schema(conn)
}

/// Highest recorded version, 0 for a database with no catalog yet.
fn stored_version(conn: &Connection) -> Result<i32, SchemaError> {
    let version: Option<i32> =
        conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;
    Ok(version.unwrap_or(0))
}

const VERSION_TABLE: &str = "
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);
";

const V1_CATALOG: &str = r#"
-- Actors and directors
CREATE TABLE people (
    name TEXT PRIMARY KEY NOT NULL,
    nationality TEXT NOT NULL DEFAULT ''
);

-- No cascade on the director: directors can't be removed while in use
CREATE TABLE movies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    director_name TEXT NOT NULL REFERENCES people(name),
    length_in_seconds INTEGER NOT NULL CHECK (length_in_seconds >= 0)
);
CREATE UNIQUE INDEX idx_movies_natural ON movies(title, director_name);
CREATE INDEX idx_movies_director ON movies(director_name);

CREATE TABLE castings (
    movie_id INTEGER NOT NULL REFERENCES movies(id) ON DELETE CASCADE,
    actor_name TEXT NOT NULL REFERENCES people(name) ON DELETE CASCADE,
    PRIMARY KEY (movie_id, actor_name)
);
CREATE INDEX idx_castings_actor ON castings(actor_name);
"#;
