//! Resources compiled into the binary.

use std::collections::HashMap;

use super::{PropertySource, SourceError};

/// Serves properties text embedded at compile time.
///
/// Populate it with [`bundled_source!`](crate::bundled_source), which reads
/// each file with `include_str!`, or with [`BundledSource::with_resource`].
#[derive(Debug, Clone, Default)]
pub struct BundledSource {
    resources: HashMap<&'static str, &'static str>,
}

impl BundledSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `contents` under `name`, replacing any previous entry.
    pub fn with_resource(mut self, name: &'static str, contents: &'static str) -> Self {
        self.resources.insert(name, contents);
        self
    }

    /// Names of all bundled resources, sorted.
    pub fn resource_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.resources.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl PropertySource for BundledSource {
    fn open(&self, filename: &str) -> Result<Vec<u8>, SourceError> {
        // Resource names are rooted; a leading slash is accepted and ignored.
        let name = filename.trim_start_matches('/');
        self.resources
            .get(name)
            .map(|contents| contents.as_bytes().to_vec())
            .ok_or_else(|| SourceError::NotFound {
                location: format!("bundled resource {name}"),
            })
    }

    fn name(&self) -> String {
        "bundled".to_string()
    }
}

/// Build a [`BundledSource`] from files embedded with `include_str!`.
///
/// Paths are relative to the file invoking the macro.
///
/// ```rust,ignore
/// let source = propmanager_config::bundled_source! {
///     "default.properties" => "../resources/default.properties",
///     "prod.properties" => "../resources/prod.properties",
/// };
/// ```
#[macro_export]
macro_rules! bundled_source {
    ($($name:literal => $path:literal),* $(,)?) => {
        $crate::BundledSource::new()$(.with_resource($name, include_str!($path)))*
    };
}
