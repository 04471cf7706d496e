//! Parser for the flat `.properties` text format.
//!
//! Responsibilities:
//! - Split input into logical lines (comments, blank lines, continuations).
//! - Separate each logical line into a key and a value.
//! - Unescape keys and values (`\t`, `\n`, `\r`, `\f`, `\uXXXX`, `\c`).
//!
//! Does NOT handle:
//! - Locating or reading the source (see `source`).
//! - Profile resolution or caching (see `loader` and `store`).
//!
//! Invariants:
//! - Input is UTF-8 when it decodes as such, otherwise ISO-8859-1. Decoding never fails.
//! - Later duplicate keys overwrite earlier ones.
//! - Parsing never partially succeeds: any error discards the whole mapping.

mod error;
mod lines;
mod parser;

pub use error::ParseError;
pub use parser::{parse, parse_bytes};
