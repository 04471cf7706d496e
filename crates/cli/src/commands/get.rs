//! Get command implementation.

use std::io::Write;

use anyhow::Result;
use propmanager_config::PropertyStore;

use crate::error::ExitCode;

/// Print the value for `key`, or `default` when given.
///
/// A miss without a default reports to stderr and yields `KeyNotFound`.
pub fn run(
    store: &PropertyStore,
    key: &str,
    default: Option<&str>,
    out: &mut impl Write,
) -> Result<ExitCode> {
    let value = match default {
        Some(fallback) => Some(store.get_or(key, fallback)),
        None => store.get(key),
    };

    match value {
        Some(value) => {
            writeln!(out, "{value}")?;
            Ok(ExitCode::Success)
        }
        None => {
            tracing::debug!(key, filename = store.filename(), "Key not found");
            eprintln!("Key '{}' not found in {}", key, store.filename());
            Ok(ExitCode::KeyNotFound)
        }
    }
}
