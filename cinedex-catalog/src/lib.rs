//! Movie catalog data model types, length formatting, and query plans.
//!
//! This crate defines the catalog data model without any database
//! dependencies. Consumers build [`MovieQuery`] plans from these types and
//! hand them to `cinedex-db` for execution.

pub mod length;
pub mod query;
pub mod types;

pub use length::{format_length, parse_length, LengthError};
pub use query::{MovieFilter, MovieQuery, SortOrder};
pub use types::*;
