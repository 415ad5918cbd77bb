//! Query plans for listing movies.
//!
//! A [`MovieQuery`] is a storage-independent description of which movies to
//! list and in what order. Filters carry compiled regular expressions, so a
//! plan that exists always has valid patterns.
//!
//! The compiled regex is the reference for what a filter matches. Stores
//! are free to evaluate the same [`MovieFilter::pattern`] their own way (the
//! SQLite store compiles it again inside its `REGEXP` function), but must
//! select exactly the values [`MovieFilter::regex`] matches.

use regex::Regex;

/// A predicate on one movie attribute, matched with regex search semantics
/// (the pattern may match anywhere in the value).
#[derive(Debug, Clone)]
pub enum MovieFilter {
    /// Match against the movie title.
    Title(Regex),
    /// Match against the director's name.
    Director(Regex),
    /// Match against the name of any actor cast in the movie.
    Actor(Regex),
}

impl MovieFilter {
    /// The compiled pattern, the reference matcher for this filter.
    pub fn regex(&self) -> &Regex {
        match self {
            MovieFilter::Title(re) | MovieFilter::Director(re) | MovieFilter::Actor(re) => re,
        }
    }

    /// The source pattern of the filter's regex.
    pub fn pattern(&self) -> &str {
        self.regex().as_str()
    }

    /// Whether evaluating this filter requires the casting relation.
    pub fn needs_castings(&self) -> bool {
        matches!(self, MovieFilter::Actor(_))
    }
}

/// Ordering policy for listed movies. Every policy breaks ties by title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Title ascending.
    #[default]
    Title,
    /// Length ascending, then title ascending.
    LengthAscending,
    /// Length descending, then title ascending.
    LengthDescending,
}

/// Filters and ordering for a movie listing.
///
/// An empty filter list selects every movie. Each movie appears at most once
/// in the result, however many of its actors match an [`MovieFilter::Actor`]
/// filter.
#[derive(Debug, Clone, Default)]
pub struct MovieQuery {
    pub filters: Vec<MovieFilter>,
    pub order: SortOrder,
}

impl MovieQuery {
    /// A plan selecting all movies ordered by title.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: MovieFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn sorted_by(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    pub fn needs_castings(&self) -> bool {
        self.filters.iter().any(MovieFilter::needs_castings)
    }
}
