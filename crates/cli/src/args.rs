//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read the `profile` setting from the environment via clap.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not build the loader (see `config_context` module).

use clap::{Parser, Subcommand, ValueEnum};
use propmanager_config::constants::PROFILE_ENV_VAR;
use std::path::PathBuf;

use crate::formatters::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "propmanager")]
#[command(about = "PropManager - Read values from profile-selected .properties files", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  propmanager get db.host\n  propmanager --profile prod get db.port --default 5432\n  propmanager list --output json\n  profile=staging propmanager resolve\n"
)]
pub struct Cli {
    /// Profile to load; `.properties` is appended when missing (default: "default")
    #[arg(long, global = true, env = PROFILE_ENV_VAR)]
    pub profile: Option<String>,

    /// Where the properties file is read from
    #[arg(long, global = true, value_enum, default_value_t = SourceKind::File)]
    pub source: SourceKind,

    /// Directory the file is resolved against (file source; default: working directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Resource root searched in order, may be repeated (search-path source).
    ///
    /// Defaults to the PROPMANAGER_RESOURCE_PATH path list when omitted.
    #[arg(long = "resource-root", global = true, value_name = "DIR")]
    pub resource_roots: Vec<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Source strategy selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// Filesystem, relative to the working directory or --base-dir
    File,
    /// Ordered resource roots, first hit wins
    SearchPath,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value of a key
    Get {
        /// Key to look up
        key: String,

        /// Value printed when the key is absent (otherwise the command fails)
        #[arg(short, long)]
        default: Option<String>,
    },

    /// Print every entry, sorted by key
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },

    /// Print the filename the current profile resolves to, without loading it
    Resolve,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_get_with_default() {
        let cli = Cli::try_parse_from([
            "propmanager",
            "--profile",
            "prod",
            "get",
            "db.port",
            "--default",
            "5432",
        ])
        .unwrap();

        assert_eq!(cli.profile.as_deref(), Some("prod"));
        assert_eq!(cli.source, SourceKind::File);
        match cli.command {
            Commands::Get { key, default } => {
                assert_eq!(key, "db.port");
                assert_eq!(default.as_deref(), Some("5432"));
            }
            other => panic!("expected get, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_search_path_roots() {
        let cli = Cli::try_parse_from([
            "propmanager",
            "list",
            "--source",
            "search-path",
            "--resource-root",
            "a",
            "--resource-root",
            "b",
        ])
        .unwrap();

        assert_eq!(cli.source, SourceKind::SearchPath);
        assert_eq!(cli.resource_roots, vec![PathBuf::from("a"), PathBuf::from("b")]);
    }
}
