//! Line sources that feed commands and workflow answers to a session.

use std::io::{self, BufRead};

/// Something that yields input lines one at a time.
pub trait LineSource {
    /// The next line without its line terminator, or `None` at end of input.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<T: LineSource + ?Sized> LineSource for &mut T {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        (**self).next_line()
    }
}

/// Reads lines from any buffered reader: stdin, a file, or a byte slice.
///
/// ```
/// use cinedex_shell::{LineSource, ReaderLines};
///
/// let mut lines = ReaderLines::new("Titanic\r\n03:14:00\n".as_bytes());
/// assert_eq!(lines.next_line().unwrap().as_deref(), Some("Titanic"));
/// assert_eq!(lines.next_line().unwrap().as_deref(), Some("03:14:00"));
/// assert_eq!(lines.next_line().unwrap(), None);
/// ```
pub struct ReaderLines<R> {
    reader: R,
}

impl<R: BufRead> ReaderLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl ReaderLines<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
