//! Error types for store loading.
//!
//! Responsibilities:
//! - Define the single load failure kind returned by `StoreLoader::build`.
//! - Define dotenv failures surfaced by `StoreLoader::load_dotenv`.
//!
//! Invariants:
//! - Every load failure names the resolved filename; the cause is chained via `source()`.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;

use thiserror::Error;

use crate::properties::ParseError;
use crate::source::SourceError;

/// The resolved source could not be opened or parsed.
///
/// This is not recoverable: no store is produced and no fallback source is tried.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("Error loading properties file {filename}")]
    Open {
        filename: String,
        #[source]
        source: SourceError,
    },

    #[error("Error parsing properties file {filename}")]
    Parse {
        filename: String,
        #[source]
        source: ParseError,
    },
}

impl ConfigLoadError {
    /// The resolved filename the failure refers to.
    pub fn filename(&self) -> &str {
        match self {
            ConfigLoadError::Open { filename, .. } | ConfigLoadError::Parse { filename, .. } => {
                filename
            }
        }
    }
}

/// Errors that can occur while loading a `.env` file.
#[derive(Error, Debug)]
pub enum DotenvError {
    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    Parse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    Io { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    Unknown,
}
