//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the command handlers.
//! - Load the store once for commands that read properties.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Loader construction (see `config_context`).

use std::io::Write;

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::config_context::loader_from_cli;
use crate::error::ExitCode;

/// Dispatch CLI commands to their respective handlers.
///
/// Returns the exit code the process should terminate with. Load failures
/// are returned as errors so `main` can report them.
pub(crate) fn run_command(cli: Cli) -> Result<ExitCode> {
    let loader = loader_from_cli(&cli);
    let mut stdout = std::io::stdout().lock();

    let code = match cli.command {
        Commands::Resolve => commands::resolve::run(&loader, &mut stdout)?,
        Commands::Get { key, default } => {
            let store = loader.build()?;
            commands::get::run(&store, &key, default.as_deref(), &mut stdout)?
        }
        Commands::List { output } => {
            let store = loader.build()?;
            commands::list::run(&store, output, &mut stdout)?
        }
    };

    // process::exit skips destructors, so flush before returning.
    stdout.flush()?;
    Ok(code)
}
