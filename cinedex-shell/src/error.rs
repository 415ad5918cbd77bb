use cinedex_catalog::LengthError;
use cinedex_db::StoreError;
use thiserror::Error;

/// Errors raised while interpreting a command.
///
/// Every variant except [`ShellError::Io`] is reported to the user as a
/// single `- <message>` line and never ends the session.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Bad tokens, flags, or command shape
    #[error("{0}")]
    MalformedCommand(String),

    /// First character does not name a command
    #[error("Invalid command. Please try again.")]
    UnknownCommand,

    /// Duplicate person or movie, or a director that is still in use
    #[error("{0}")]
    Conflict(String),

    /// A referenced person does not exist
    #[error("{0}")]
    NotFound(String),

    /// A length that is not `HH:MM:SS`
    #[error(transparent)]
    InputFormat(#[from] LengthError),

    /// The store rejected an operation
    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        #[source]
        source: StoreError,
    },

    /// Input ran out in the middle of an interactive workflow
    #[error("Input ended before the command was complete.")]
    InputClosed,

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShellError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedCommand(msg.into())
    }

    pub(crate) fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub(crate) fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// The retry message for a name that matches no person.
    pub(crate) fn unknown_person(name: &str) -> Self {
        Self::NotFound(format!("We could not find \"{}\", try again!", name))
    }

    /// Wrap a store error with the operation that was running.
    pub(crate) fn store(context: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| Self::Store { context, source }
    }
}

/// Print an error as a single `- <message>` line.
pub(crate) fn report<W: std::io::Write + ?Sized>(
    out: &mut W,
    err: &ShellError,
) -> std::io::Result<()> {
    writeln!(out, "- {}", err)
}
