//! Command interpreter for the movie catalog shell.
//!
//! A raw command line flows through the [`tokenizer`], the [`options`]
//! parser and the [`command`] dispatcher, then either into the [`query`]
//! builder (for listings) or one of the interactive [`workflows`]. All
//! storage access goes through [`cinedex_db::CatalogStore`], and all state
//! for one interactive run lives in a [`Session`].

pub mod command;
pub mod error;
pub mod format;
pub mod input;
pub mod list;
pub mod options;
pub mod query;
pub mod session;
pub mod tokenizer;
pub mod workflows;

pub use command::{AddTarget, CommandKind};
pub use error::ShellError;
pub use input::{LineSource, ReaderLines};
pub use options::{parse_options, ParsedOptions, Switch, ValuedOption};
pub use query::{build_list_request, ListRequest};
pub use session::Session;
pub use tokenizer::tokenize;
