//! Filesystem-backed source.

use std::path::{Path, PathBuf};

use super::{PropertySource, SourceError, read_file};

/// Opens properties files on the local filesystem.
///
/// Without a base directory, filenames resolve relative to the process
/// working directory.
#[derive(Debug, Clone, Default)]
pub struct FileSource {
    base_dir: Option<PathBuf>,
}

impl FileSource {
    /// Source resolving relative to the working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Source resolving relative to `dir` instead of the working directory.
    pub fn with_base_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(dir.into()),
        }
    }

    /// Returns the configured base directory, if any.
    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    fn path_for(&self, filename: &str) -> PathBuf {
        match &self.base_dir {
            Some(dir) => dir.join(filename),
            None => PathBuf::from(filename),
        }
    }
}

impl PropertySource for FileSource {
    fn open(&self, filename: &str) -> Result<Vec<u8>, SourceError> {
        let path = self.path_for(filename);
        tracing::debug!(path = %path.display(), "Opening properties file");
        read_file(path)
    }

    fn name(&self) -> String {
        match &self.base_dir {
            Some(dir) => format!("file:{}", dir.display()),
            None => "file".to_string(),
        }
    }
}
