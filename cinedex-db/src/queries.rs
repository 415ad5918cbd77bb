//! Read queries for the catalog database.
//!
//! Provides existence checks, filtered movie listing, and cast lookup.

use cinedex_catalog::{Movie, MovieFilter, MovieQuery, SortOrder};
use rusqlite::{params, params_from_iter, Connection};

use crate::operations::StoreError;

// ── Existence Checks ────────────────────────────────────────────────────────

/// Whether a person with exactly this name exists.
pub fn person_exists(conn: &Connection, name: &str) -> Result<bool, StoreError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM people WHERE name = ?1)",
        params![name],
        |row| row.get(0),
    )?;
    Ok(exists)
}

/// Whether the person directs at least one movie.
pub fn is_director(conn: &Connection, name: &str) -> Result<bool, StoreError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM movies WHERE director_name = ?1)",
        params![name],
        |row| row.get(0),
    )?;
    Ok(exists)
}

/// Whether a movie with this title and director is already stored.
pub fn movie_exists(conn: &Connection, title: &str, director_name: &str) -> Result<bool, StoreError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM movies WHERE title = ?1 AND director_name = ?2)",
        params![title, director_name],
        |row| row.get(0),
    )?;
    Ok(exists)
}

// ── Movie Listing ───────────────────────────────────────────────────────────

/// Translate a query plan into SQL text and its positional parameters.
///
/// Filters become `REGEXP` predicates with bound patterns. Actor filters use
/// an `EXISTS` sub-select on castings rather than a join, so a movie with
/// several matching actors is still selected once.
pub fn movie_query_sql(query: &MovieQuery) -> (String, Vec<String>) {
    let mut sql = String::from(
        "SELECT m.id, m.title, m.director_name, m.length_in_seconds FROM movies m",
    );
    let mut params = Vec::with_capacity(query.filters.len());

    for (i, filter) in query.filters.iter().enumerate() {
        sql.push_str(if i == 0 { " WHERE " } else { " AND " });
        match filter {
            MovieFilter::Title(_) => sql.push_str("m.title REGEXP ?"),
            MovieFilter::Director(_) => sql.push_str("m.director_name REGEXP ?"),
            MovieFilter::Actor(_) => sql.push_str(
                "EXISTS (SELECT 1 FROM castings c WHERE c.movie_id = m.id AND c.actor_name REGEXP ?)",
            ),
        }
        params.push(filter.pattern().to_string());
    }

    sql.push_str(match query.order {
        SortOrder::Title => " ORDER BY m.title ASC",
        SortOrder::LengthAscending => " ORDER BY m.length_in_seconds ASC, m.title ASC",
        SortOrder::LengthDescending => " ORDER BY m.length_in_seconds DESC, m.title ASC",
    });

    (sql, params)
}

/// List movies matching a query plan, in the plan's order.
pub fn list_movies(conn: &Connection, query: &MovieQuery) -> Result<Vec<Movie>, StoreError> {
    let (sql, params) = movie_query_sql(query);
    log::debug!("Movie query: {} {:?}", sql, params);

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(params.iter()), row_to_movie)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Names of the actors cast in a movie, in the order they were added.
pub fn actors_for_movie(conn: &Connection, movie_id: i64) -> Result<Vec<String>, StoreError> {
    let mut stmt =
        conn.prepare("SELECT actor_name FROM castings WHERE movie_id = ?1 ORDER BY rowid")?;
    let rows = stmt.query_map(params![movie_id], |row| row.get::<_, String>(0))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Get overall catalog statistics.
pub fn catalog_stats(conn: &Connection) -> Result<CatalogStats, StoreError> {
    let people: i64 = conn.query_row("SELECT COUNT(*) FROM people", [], |r| r.get(0))?;
    let movies: i64 = conn.query_row("SELECT COUNT(*) FROM movies", [], |r| r.get(0))?;
    let castings: i64 = conn.query_row("SELECT COUNT(*) FROM castings", [], |r| r.get(0))?;

    Ok(CatalogStats {
        people,
        movies,
        castings,
    })
}

/// Row counts for the catalog tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub people: i64,
    pub movies: i64,
    pub castings: i64,
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_to_movie(row: &rusqlite::Row<'_>) -> rusqlite::Result<Movie> {
    Ok(Movie {
        id: row.get(0)?,
        title: row.get(1)?,
        director_name: row.get(2)?,
        length_in_seconds: row.get(3)?,
    })
}
