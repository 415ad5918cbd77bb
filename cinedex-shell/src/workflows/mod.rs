//! Interactive add and delete workflows.
//!
//! Each workflow checks its business rules before touching the store, so
//! users get a precise message rather than a constraint violation.

pub mod add_movie;
pub mod add_person;
pub mod delete_person;

use std::io::Write;

pub use add_movie::{add_movie, AddMovie, AddMovieState};
pub use add_person::add_person;
pub use delete_person::delete_person;

use crate::error::ShellError;
use crate::input::LineSource;

/// Print a prompt without a newline and read the trimmed answer.
pub(crate) fn prompt_line<L, W>(input: &mut L, out: &mut W, prompt: &str) -> Result<String, ShellError>
where
    L: LineSource + ?Sized,
    W: Write + ?Sized,
{
    write!(out, "{}", prompt)?;
    out.flush()?;
    read_line(input)
}

/// Read the next trimmed line, failing if input has run out.
pub(crate) fn read_line<L: LineSource + ?Sized>(input: &mut L) -> Result<String, ShellError> {
    let line = input.next_line()?.ok_or(ShellError::InputClosed)?;
    Ok(line.trim().to_string())
}
