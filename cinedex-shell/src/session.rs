//! The session context: one store, one input, one output.

use std::io::{self, Write};

use cinedex_db::{CatalogStore, StoreError};

use crate::command::{parse_delete_target, AddTarget, CommandKind};
use crate::error::{report, ShellError};
use crate::input::LineSource;
use crate::list::print_movies;
use crate::options::parse_options;
use crate::query::build_list_request;
use crate::tokenizer::tokenize;
use crate::workflows;

/// Default REPL prompt.
pub const DEFAULT_PROMPT: &str = "> ";

/// Owns everything one interactive run needs.
///
/// The store is opened before the session is created and closed once by
/// [`Session::close`]; commands and workflow answers are both read from the
/// same line source.
pub struct Session<S, L, W> {
    store: S,
    input: L,
    out: W,
    prompt: String,
}

impl<S, L, W> Session<S, L, W>
where
    S: CatalogStore,
    L: LineSource,
    W: Write,
{
    pub fn new(store: S, input: L, out: W) -> Self {
        Self {
            store,
            input,
            out,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Read and execute commands until `exit`, `quit`, or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.out, "{}", self.prompt)?;
            self.out.flush()?;

            let Some(line) = self.input.next_line()? else {
                writeln!(self.out)?;
                break;
            };
            let line = line.trim();
            if is_exit(line) {
                break;
            }
            self.execute(line)?;
        }
        writeln!(self.out, "Exiting the application.")?;
        Ok(())
    }

    /// Execute one command line.
    ///
    /// Every command failure is printed as a `- <message>` line. Only a
    /// failure to write output is returned.
    pub fn execute(&mut self, line: &str) -> io::Result<()> {
        match self.dispatch(line) {
            Ok(()) => Ok(()),
            Err(ShellError::Io(e)) => Err(e),
            Err(e) => {
                log::debug!("Command {:?} failed: {:?}", line, e);
                report(&mut self.out, &e)
            }
        }
    }

    /// End the session and release the store.
    pub fn close(self) -> Result<(), StoreError> {
        self.store.close()
    }

    fn dispatch(&mut self, line: &str) -> Result<(), ShellError> {
        match CommandKind::classify(line) {
            CommandKind::List => self.list(line),
            CommandKind::Add => match AddTarget::parse(line)? {
                AddTarget::Person => {
                    workflows::add_person(&self.store, &mut self.input, &mut self.out)
                }
                AddTarget::Movie => {
                    workflows::add_movie(&self.store, &mut self.input, &mut self.out)
                }
            },
            CommandKind::Delete => {
                let name = parse_delete_target(line)?;
                workflows::delete_person(&self.store, name, &mut self.out)
            }
            CommandKind::Unknown => Err(ShellError::UnknownCommand),
        }
    }

    fn list(&mut self, line: &str) -> Result<(), ShellError> {
        let tokens = tokenize(line);
        let options = parse_options(tokens.get(1..).unwrap_or_default())?;
        let request = build_list_request(&options)?;
        print_movies(&self.store, &request, &mut self.out)
    }
}

/// Whether a line ends the session.
pub fn is_exit(line: &str) -> bool {
    line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit")
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
