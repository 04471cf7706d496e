//! Resolve command implementation.

use std::io::Write;

use anyhow::Result;
use propmanager_config::StoreLoader;

use crate::error::ExitCode;

/// Print the resolved filename. The file itself is not opened.
pub fn run(loader: &StoreLoader, out: &mut impl Write) -> Result<ExitCode> {
    writeln!(out, "{}", loader.resolved_filename())?;
    Ok(ExitCode::Success)
}
