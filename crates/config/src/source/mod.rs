//! Pluggable property sources.
//!
//! Responsibilities:
//! - Define the `PropertySource` strategy used by the loader to open a named source.
//! - Provide filesystem, search-path, and compile-time bundled implementations.
//!
//! Does NOT handle:
//! - Profile or filename resolution (see `loader::profile`).
//! - Parsing the returned bytes (see `properties`).
//!
//! Invariants:
//! - `open` returns the complete raw contents; sources never parse.
//! - A missing source is reported as `SourceError::NotFound`, distinct from I/O failures.

use std::path::PathBuf;

use thiserror::Error;

mod bundled;
mod file;
mod search_path;

pub use bundled::BundledSource;
pub use file::FileSource;
pub use search_path::SearchPathSource;

/// Errors that can occur while opening a property source.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("{location} not found")]
    NotFound { location: String },

    #[error("Failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid resource name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },
}

impl SourceError {
    /// Returns true if the source simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SourceError::NotFound { .. })
    }
}

/// Strategy for opening a named properties source.
///
/// Implement this trait to load properties from somewhere other than the
/// provided sources (e.g., an archive or a remote store).
pub trait PropertySource: Send + Sync {
    /// Read the full contents of `filename`.
    ///
    /// # Errors
    ///
    /// Returns an error if the source does not exist or cannot be read.
    fn open(&self, filename: &str) -> Result<Vec<u8>, SourceError>;

    /// Human-readable name for this source (for logging/debugging).
    fn name(&self) -> String;
}

impl<S: PropertySource + ?Sized> PropertySource for Box<S> {
    fn open(&self, filename: &str) -> Result<Vec<u8>, SourceError> {
        (**self).open(filename)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}

/// Map a filesystem read failure, keeping not-found distinct.
pub(crate) fn read_file(path: PathBuf) -> Result<Vec<u8>, SourceError> {
    match std::fs::read(&path) {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(SourceError::NotFound {
            location: path.display().to_string(),
        }),
        Err(source) => Err(SourceError::Io { path, source }),
    }
}
