//! SQLite persistence layer for the movie catalog.
//!
//! Provides schema creation, CRUD operations, filtered listing queries, and
//! the [`CatalogStore`] trait the shell consumes, backed by SQLite (via
//! rusqlite with the bundled feature).

pub mod functions;
pub mod operations;
pub mod queries;
pub mod schema;
pub mod store;

pub use operations::{
    delete_castings_for_actor, delete_person, insert_casting, insert_movie, insert_person,
    StoreError,
};
pub use queries::{
    actors_for_movie, catalog_stats, is_director, list_movies, movie_exists, person_exists,
    CatalogStats,
};
pub use schema::{open_database, open_memory, SchemaError};
pub use store::{CatalogStore, SqliteCatalog};
