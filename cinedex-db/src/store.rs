//! The data-access interface consumed by the command shell.

use std::path::Path;

use cinedex_catalog::{Casting, Movie, MovieQuery, NewMovie, Person};
use rusqlite::Connection;

use crate::operations::{self, StoreError};
use crate::queries::{self, CatalogStats};
use crate::schema::{self, SchemaError};

/// Catalog reads and writes needed by the shell workflows.
///
/// Implementations enforce referential integrity themselves: inserting a
/// movie with an unknown director or a casting with an unknown actor must
/// fail, and deleting a person must remove that person's castings.
pub trait CatalogStore {
    fn person_exists(&self, name: &str) -> Result<bool, StoreError>;
    fn insert_person(&self, person: &Person) -> Result<(), StoreError>;
    fn delete_person(&self, name: &str) -> Result<(), StoreError>;
    /// Whether the person directs at least one movie.
    fn is_director(&self, name: &str) -> Result<bool, StoreError>;

    fn movie_exists(&self, title: &str, director_name: &str) -> Result<bool, StoreError>;
    /// Insert a movie and return its assigned id.
    fn insert_movie(&self, movie: &NewMovie) -> Result<i64, StoreError>;
    /// Movies selected by a query plan, each at most once, in plan order.
    fn list_movies(&self, query: &MovieQuery) -> Result<Vec<Movie>, StoreError>;

    fn insert_casting(&self, movie_id: i64, actor_name: &str) -> Result<(), StoreError>;
    fn delete_castings_for_actor(&self, actor_name: &str) -> Result<usize, StoreError>;
    fn actors_for_movie(&self, movie_id: i64) -> Result<Vec<String>, StoreError>;

    fn stats(&self) -> Result<CatalogStats, StoreError>;

    /// Release the underlying storage. Called once when a session ends.
    fn close(self) -> Result<(), StoreError>
    where
        Self: Sized;
}

/// A [`CatalogStore`] backed by a single SQLite connection.
pub struct SqliteCatalog {
    conn: Connection,
}

impl SqliteCatalog {
    /// Open or create a catalog database file.
    pub fn open(path: &Path) -> Result<Self, SchemaError> {
        schema::open_database(path).map(Self::from_connection)
    }

    /// Open a fresh in-memory catalog.
    pub fn open_memory() -> Result<Self, SchemaError> {
        schema::open_memory().map(Self::from_connection)
    }

    /// Wrap a connection that already has the schema and functions installed.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }
}

impl CatalogStore for SqliteCatalog {
    fn person_exists(&self, name: &str) -> Result<bool, StoreError> {
        queries::person_exists(&self.conn, name)
    }

    fn insert_person(&self, person: &Person) -> Result<(), StoreError> {
        operations::insert_person(&self.conn, person)
    }

    fn delete_person(&self, name: &str) -> Result<(), StoreError> {
        operations::delete_person(&self.conn, name)
    }

    fn is_director(&self, name: &str) -> Result<bool, StoreError> {
        queries::is_director(&self.conn, name)
    }

    fn movie_exists(&self, title: &str, director_name: &str) -> Result<bool, StoreError> {
        queries::movie_exists(&self.conn, title, director_name)
    }

    fn insert_movie(&self, movie: &NewMovie) -> Result<i64, StoreError> {
        operations::insert_movie(&self.conn, movie)
    }

    fn list_movies(&self, query: &MovieQuery) -> Result<Vec<Movie>, StoreError> {
        queries::list_movies(&self.conn, query)
    }

    fn insert_casting(&self, movie_id: i64, actor_name: &str) -> Result<(), StoreError> {
        let casting = Casting::new(movie_id, actor_name);
        if !operations::insert_casting(&self.conn, &casting)? {
            log::debug!("{} is already cast in movie {}", actor_name, movie_id);
        }
        Ok(())
    }

    fn delete_castings_for_actor(&self, actor_name: &str) -> Result<usize, StoreError> {
        operations::delete_castings_for_actor(&self.conn, actor_name)
    }

    fn actors_for_movie(&self, movie_id: i64) -> Result<Vec<String>, StoreError> {
        queries::actors_for_movie(&self.conn, movie_id)
    }

    fn stats(&self) -> Result<CatalogStats, StoreError> {
        queries::catalog_stats(&self.conn)
    }

    fn close(self) -> Result<(), StoreError> {
        self.conn.close().map_err(|(_, e)| StoreError::Sqlite(e))
    }
}
