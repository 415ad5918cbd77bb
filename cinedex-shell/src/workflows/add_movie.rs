//! The add-movie workflow as an explicit state machine.
//!
//! ```text
//! AwaitTitle -> AwaitDuration -> AwaitDirector -> AwaitActors -> Done
//! ```
//!
//! Bad lengths and unknown names are reported and the same state is kept,
//! so the caller re-prompts. The movie is inserted when the director is
//! accepted; castings are added one actor line at a time until `exit`.

use std::io::Write;

use cinedex_catalog::{parse_length, Movie, NewMovie};
use cinedex_db::CatalogStore;

use super::read_line;
use crate::error::{report, ShellError};
use crate::input::LineSource;

const CONTEXT: &str = "Error adding movie";

/// Ends the actor list (case-insensitive).
pub const ACTORS_SENTINEL: &str = "exit";

/// Where the add-movie workflow is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddMovieState {
    AwaitTitle,
    AwaitDuration { title: String },
    AwaitDirector { title: String, length_in_seconds: u32 },
    /// The movie is stored; each line names an actor.
    AwaitActors { movie: Movie },
    Done,
}

/// Drives one add-movie interaction, one input line at a time.
#[derive(Debug)]
pub struct AddMovie {
    state: AddMovieState,
}

impl Default for AddMovie {
    fn default() -> Self {
        Self::new()
    }
}

impl AddMovie {
    pub fn new() -> Self {
        Self {
            state: AddMovieState::AwaitTitle,
        }
    }

    pub fn state(&self) -> &AddMovieState {
        &self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == AddMovieState::Done
    }

    /// The prompt to show before reading the next line, if the state has one.
    /// Actor names are read without a per-line prompt.
    pub fn prompt(&self) -> Option<&'static str> {
        match self.state {
            AddMovieState::AwaitTitle => Some("Title: "),
            AddMovieState::AwaitDuration { .. } => Some("Length: "),
            AddMovieState::AwaitDirector { .. } => Some("Director: "),
            AddMovieState::AwaitActors { .. } | AddMovieState::Done => None,
        }
    }

    /// Consume one input line.
    ///
    /// Recoverable rejections are written to `out` and leave the state as it
    /// was. An `Err` ends the workflow: a duplicate title and director, or a
    /// store failure.
    pub fn advance<S, W>(&mut self, line: &str, store: &S, out: &mut W) -> Result<(), ShellError>
    where
        S: CatalogStore + ?Sized,
        W: Write + ?Sized,
    {
        let line = line.trim();
        match &self.state {
            AddMovieState::AwaitTitle => {
                self.state = AddMovieState::AwaitDuration {
                    title: line.to_string(),
                };
            }

            AddMovieState::AwaitDuration { title } => match parse_length(line) {
                // A zero length counts as not given yet.
                Ok(0) => log::debug!("Zero length entered, asking again"),
                Ok(length_in_seconds) => {
                    self.state = AddMovieState::AwaitDirector {
                        title: title.clone(),
                        length_in_seconds,
                    };
                }
                Err(e) => report(out, &ShellError::InputFormat(e))?,
            },

            AddMovieState::AwaitDirector {
                title,
                length_in_seconds,
            } => {
                if !store.person_exists(line).map_err(ShellError::store(CONTEXT))? {
                    report(out, &ShellError::unknown_person(line))?;
                    return Ok(());
                }

                let movie = NewMovie::new(title.as_str(), line, *length_in_seconds);
                if store
                    .movie_exists(&movie.title, &movie.director_name)
                    .map_err(ShellError::store(CONTEXT))?
                {
                    self.state = AddMovieState::Done;
                    return Err(ShellError::conflict(
                        "Movie with the same title and director already exists.",
                    ));
                }

                let id = store
                    .insert_movie(&movie)
                    .map_err(ShellError::store(CONTEXT))?;
                log::debug!("Inserted movie {:?} with id {}", movie.title, id);
                writeln!(out, "Starring:")?;
                self.state = AddMovieState::AwaitActors {
                    movie: movie.with_id(id),
                };
            }

            AddMovieState::AwaitActors { movie } => {
                if line.eq_ignore_ascii_case(ACTORS_SENTINEL) {
                    writeln!(out, "Movie \"{}\" has been added.", movie.title)?;
                    self.state = AddMovieState::Done;
                } else if store.person_exists(line).map_err(ShellError::store(CONTEXT))? {
                    store
                        .insert_casting(movie.id, line)
                        .map_err(ShellError::store(CONTEXT))?;
                } else {
                    report(out, &ShellError::unknown_person(line))?;
                }
            }

            AddMovieState::Done => log::warn!("Add-movie input after completion: {:?}", line),
        }
        Ok(())
    }
}

/// Run the add-movie workflow to completion, reading answers from `input`.
pub fn add_movie<S, L, W>(store: &S, input: &mut L, out: &mut W) -> Result<(), ShellError>
where
    S: CatalogStore + ?Sized,
    L: LineSource + ?Sized,
    W: Write + ?Sized,
{
    let mut flow = AddMovie::new();
    while !flow.is_done() {
        if let Some(prompt) = flow.prompt() {
            write!(out, "{}", prompt)?;
            out.flush()?;
        }
        let line = read_line(input)?;
        flow.advance(&line, store, out)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/add_movie_tests.rs"]
mod tests;
