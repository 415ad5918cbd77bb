//! Data model types for the movie catalog.
//!
//! These types mirror the persistent schema: people, movies, and the
//! castings that link actors to movies.

// ── Person ──────────────────────────────────────────────────────────────────

/// An actor, a director, or both. The name is the unique key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub nationality: String,
}

impl Person {
    pub fn new(name: impl Into<String>, nationality: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nationality: nationality.into(),
        }
    }
}

// ── Movie ───────────────────────────────────────────────────────────────────

/// A stored movie with its system-assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    /// Name of the directing [`Person`].
    pub director_name: String,
    pub length_in_seconds: u32,
}

/// A movie that has not been stored yet, so it has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub title: String,
    pub director_name: String,
    pub length_in_seconds: u32,
}

impl NewMovie {
    pub fn new(
        title: impl Into<String>,
        director_name: impl Into<String>,
        length_in_seconds: u32,
    ) -> Self {
        Self {
            title: title.into(),
            director_name: director_name.into(),
            length_in_seconds,
        }
    }

    /// Attach the id the store assigned on insert.
    pub fn with_id(self, id: i64) -> Movie {
        Movie {
            id,
            title: self.title,
            director_name: self.director_name,
            length_in_seconds: self.length_in_seconds,
        }
    }
}

// ── Casting ─────────────────────────────────────────────────────────────────

/// Records that a person acted in a movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Casting {
    pub movie_id: i64,
    pub actor_name: String,
}

impl Casting {
    pub fn new(movie_id: i64, actor_name: impl Into<String>) -> Self {
        Self {
            movie_id,
            actor_name: actor_name.into(),
        }
    }
}
