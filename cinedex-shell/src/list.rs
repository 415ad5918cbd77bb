//! Executes a listing against the store and prints it.

use std::io::Write;

use cinedex_db::CatalogStore;

use crate::error::ShellError;
use crate::format::{movie_line, write_cast};
use crate::query::ListRequest;

const CONTEXT: &str = "Error listing movies";

/// Print one line per selected movie, plus its cast when verbose.
pub fn print_movies<S, W>(store: &S, request: &ListRequest, out: &mut W) -> Result<(), ShellError>
where
    S: CatalogStore + ?Sized,
    W: Write + ?Sized,
{
    let movies = store
        .list_movies(&request.query)
        .map_err(ShellError::store(CONTEXT))?;
    log::debug!("Listing {} movie(s)", movies.len());

    for movie in &movies {
        writeln!(out, "{}", movie_line(movie))?;
        if request.verbose {
            let actors = store
                .actors_for_movie(movie.id)
                .map_err(ShellError::store(CONTEXT))?;
            write_cast(out, &actors)?;
        }
    }
    Ok(())
}
