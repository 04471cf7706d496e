//! Store loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `StoreLoader` for profile selection and source choice.
//! - Run the one-time load: resolve filename, open source, parse, build the store.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Filename normalization rules (delegated to profile.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - Without an explicit source, files are read relative to the working directory.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::fmt;

use super::env::apply_env;
use super::error::{ConfigLoadError, DotenvError};
use super::profile::resolve_filename;
use crate::constants::DOTENV_DISABLED_VAR;
use crate::properties::parse_bytes;
use crate::source::{FileSource, PropertySource};
use crate::store::PropertyStore;

/// Loader that resolves a profile and builds a [`PropertyStore`] from it.
#[derive(Default)]
pub struct StoreLoader {
    profile: Option<String>,
    source: Option<Box<dyn PropertySource>>,
}

impl fmt::Debug for StoreLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreLoader")
            .field("profile", &self.profile)
            .field("source", &self.source.as_ref().map(|s| s.name()))
            .finish()
    }
}

impl StoreLoader {
    /// Create a new loader with no profile and the working-directory file source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// This lets `.env` supply the `profile` setting. If `DOTENV_DISABLED`
    /// is set to "true" or "1", the file is not loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but cannot be read or has
    /// invalid syntax. Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, DotenvError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => Err(DotenvError::Parse { error_index: idx }),
            Err(dotenvy::Error::Io(io_err)) => Err(DotenvError::Io {
                kind: io_err.kind(),
            }),
            Err(_) => Err(DotenvError::Unknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Select the profile explicitly; the environment will not override it.
    pub fn with_profile(mut self, name: impl Into<String>) -> Self {
        self.profile = Some(name.into());
        self
    }

    /// Select where the resolved file is read from.
    pub fn with_source<S: PropertySource + 'static>(mut self, source: S) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Read the profile from the `profile` environment variable.
    ///
    /// Has no effect when a profile was already set with [`with_profile`](Self::with_profile).
    pub fn from_env(mut self) -> Self {
        apply_env(&mut self);
        self
    }

    /// Returns the profile selected so far, if any.
    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    pub(crate) fn set_profile(&mut self, profile: Option<String>) {
        self.profile = profile;
    }

    /// The filename `build()` will open for the current profile.
    pub fn resolved_filename(&self) -> String {
        resolve_filename(self.profile())
    }

    /// Load the resolved file and build the store.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigLoadError::Open`] if the source cannot be opened and
    /// [`ConfigLoadError::Parse`] if its contents are not valid properties.
    pub fn build(self) -> Result<PropertyStore, ConfigLoadError> {
        let filename = self.resolved_filename();
        let source = self
            .source
            .unwrap_or_else(|| Box::new(FileSource::new()));
        let source_name = source.name();

        tracing::debug!(
            profile = ?self.profile,
            filename = %filename,
            source = %source_name,
            "Loading properties"
        );

        let bytes = match source.open(&filename) {
            Ok(bytes) => bytes,
            Err(source) => return Err(ConfigLoadError::Open { filename, source }),
        };

        let properties = match parse_bytes(&bytes) {
            Ok(properties) => properties,
            Err(source) => return Err(ConfigLoadError::Parse { filename, source }),
        };

        tracing::info!(
            filename = %filename,
            source = %source_name,
            entries = properties.len(),
            "Properties loaded"
        );

        Ok(PropertyStore::new(filename, source_name, properties))
    }
}
