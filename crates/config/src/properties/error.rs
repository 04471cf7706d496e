//! Error types for properties parsing.

use thiserror::Error;

/// Errors that can occur while parsing properties text.
///
/// Values are never included in messages; only line numbers and the
/// offending escape sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed \\uxxxx encoding on line {line}: '\\u{sequence}'")]
    MalformedUnicodeEscape { line: usize, sequence: String },
}

impl ParseError {
    /// 1-based line number the error was detected on.
    pub fn line(&self) -> usize {
        match self {
            ParseError::MalformedUnicodeEscape { line, .. } => *line,
        }
    }
}
