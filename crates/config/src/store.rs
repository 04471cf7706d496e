//! Immutable, loaded property mapping.
//!
//! Responsibilities:
//! - Hold the properties loaded for one resolved filename.
//! - Serve read-only lookups with and without a fallback.
//!
//! Does NOT handle:
//! - Loading or reloading (see `loader`); a store never changes after construction.
//!
//! Invariants:
//! - Lookups never fail and have no side effects.
//! - `Debug` output lists keys only; values may hold secrets.

use std::collections::HashMap;
use std::fmt;

/// Properties loaded from a single resolved source.
///
/// Construct one at startup with [`StoreLoader`](crate::StoreLoader) and pass
/// it by reference (or `Arc`) to whatever needs configuration.
#[derive(Clone)]
pub struct PropertyStore {
    filename: String,
    source_name: String,
    properties: HashMap<String, String>,
}

impl PropertyStore {
    pub(crate) fn new(
        filename: String,
        source_name: String,
        properties: HashMap<String, String>,
    ) -> Self {
        Self {
            filename,
            source_name,
            properties,
        }
    }

    /// Value for `key`, or `None` if absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Value for `key`, or `fallback` if absent.
    pub fn get_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.get(key).unwrap_or(fallback)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// The resolved filename this store was loaded from.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Name of the source the file was read through.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Debug for PropertyStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        f.debug_struct("PropertyStore")
            .field("filename", &self.filename)
            .field("source", &self.source_name)
            .field("keys", &keys)
            .finish()
    }
}
