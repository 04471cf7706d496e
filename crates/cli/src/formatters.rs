//! Output formatters for the `list` command.
//!
//! Responsibilities:
//! - Render property entries as an aligned table or as JSON.
//!
//! Does NOT handle:
//! - Writing to stdout (returns formatted strings).
//!
//! Invariants:
//! - Entries are always rendered sorted by key.
//! - JSON output is valid even when empty (`{}`); the table prints a human message.

use std::collections::BTreeMap;

use anyhow::Result;
use clap::ValueEnum;

/// Output formats supported by `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Format sorted entries in the requested format.
pub fn format_entries(format: OutputFormat, entries: &BTreeMap<&str, &str>) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(format_table(entries)),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(entries)?)),
    }
}

fn format_table(entries: &BTreeMap<&str, &str>) -> String {
    if entries.is_empty() {
        return "No properties found.\n".to_string();
    }

    let width = entries
        .keys()
        .map(|k| k.chars().count())
        .max()
        .unwrap_or(0)
        .max("KEY".len());

    let mut out = format!("{:<width$}  VALUE\n", "KEY");
    for (key, value) in entries {
        // Multi-line values would break the table layout.
        let value = value.escape_debug().to_string();
        out.push_str(&format!("{key:<width$}  {value}\n"));
    }
    out
}
