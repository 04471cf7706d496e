//! List command implementation.

use std::collections::BTreeMap;
use std::io::Write;

use anyhow::Result;
use propmanager_config::PropertyStore;

use crate::error::ExitCode;
use crate::formatters::{OutputFormat, format_entries};

pub fn run(store: &PropertyStore, format: OutputFormat, out: &mut impl Write) -> Result<ExitCode> {
    let entries: BTreeMap<&str, &str> = store.iter().collect();
    let output = format_entries(format, &entries)?;
    out.write_all(output.as_bytes())?;
    Ok(ExitCode::Success)
}
