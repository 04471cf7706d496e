//! Ordered resource roots, searched first hit wins.

use std::path::{Component, Path, PathBuf};

use super::{PropertySource, SourceError, read_file};
use crate::constants::RESOURCE_PATH_ENV_VAR;
use crate::loader::env_var_or_none;

/// Looks a resource name up in a list of root directories.
///
/// Names must be relative and stay inside the roots: absolute paths and
/// `..` components are rejected.
#[derive(Debug, Clone, Default)]
pub struct SearchPathSource {
    roots: Vec<PathBuf>,
}

impl SearchPathSource {
    /// Create a source searching `roots` in order.
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    /// Read roots from `PROPMANAGER_RESOURCE_PATH` (platform path-list syntax).
    ///
    /// An unset or blank variable yields a source with no roots.
    pub fn from_env() -> Self {
        let roots = env_var_or_none(RESOURCE_PATH_ENV_VAR)
            .map(|value| std::env::split_paths(&value).collect())
            .unwrap_or_default();
        Self { roots }
    }

    /// Append a root searched after the existing ones.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.roots.push(root.into());
        self
    }

    /// Returns the roots in search order.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    fn display_roots(&self) -> String {
        self.roots
            .iter()
            .map(|r| r.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn validate_name(name: &str) -> Result<&Path, SourceError> {
    let path = Path::new(name);
    for component in path.components() {
        let reason = match component {
            Component::Normal(_) | Component::CurDir => continue,
            Component::ParentDir => "parent directory components are not allowed",
            Component::RootDir | Component::Prefix(_) => "must be a relative name",
        };
        return Err(SourceError::InvalidName {
            name: name.to_string(),
            reason,
        });
    }
    Ok(path)
}

impl PropertySource for SearchPathSource {
    fn open(&self, filename: &str) -> Result<Vec<u8>, SourceError> {
        let relative = validate_name(filename)?;

        for root in &self.roots {
            let candidate = root.join(relative);
            if candidate.is_file() {
                tracing::debug!(path = %candidate.display(), "Resolved resource on search path");
                return read_file(candidate);
            }
        }

        Err(SourceError::NotFound {
            location: format!("{} in search path [{}]", filename, self.display_roots()),
        })
    }

    fn name(&self) -> String {
        format!("search-path[{}]", self.display_roots())
    }
}
