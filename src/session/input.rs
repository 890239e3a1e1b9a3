//! Line sources
//!
//! The session pulls every answer from a [`LineSource`]. Numbers are read one
//! line at a time: the first whitespace-delimited token decides the value and
//! the rest of the line is discarded.

use std::io::BufRead;

/// Result of reading a numeric answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericToken {
    Int(i64),
    /// Blank line or a first token that is not an integer
    NotInt,
}

pub trait LineSource {
    /// Next full line without its line terminator
    ///
    /// # Returns
    /// * `Ok(Some(line))` for every line read
    /// * `Ok(None)` once the input is exhausted
    fn next_line(&mut self) -> std::io::Result<Option<String>>;

    /// Next line interpreted as an integer
    fn next_int(&mut self) -> std::io::Result<Option<NumericToken>> {
        let line = match self.next_line()? {
            Some(line) => line,
            None => return Ok(None),
        };
        let token = match line.split_whitespace().next().map(str::parse::<i64>) {
            Some(Ok(value)) => NumericToken::Int(value),
            _ => NumericToken::NotInt,
        };
        Ok(Some(token))
    }
}

/// Line source backed by any buffered reader, e.g. locked stdin
pub struct ReaderSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
