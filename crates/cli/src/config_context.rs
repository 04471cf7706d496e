//! Loader construction from CLI arguments.
//!
//! Responsibilities:
//! - Translate `--profile`, `--source`, `--base-dir`, and `--resource-root` into a `StoreLoader`.
//!
//! Invariants:
//! - Blank/whitespace-only `--profile` values are ignored so the default profile applies.
//! - The `profile` environment variable reaches the loader through clap's `env` fallback.

use propmanager_config::{FileSource, SearchPathSource, StoreLoader};

use crate::args::{Cli, SourceKind};

/// Build the loader for this invocation. Nothing is read until `build()`.
pub(crate) fn loader_from_cli(cli: &Cli) -> StoreLoader {
    let mut loader = StoreLoader::new();

    // Trimmed like the environment value; `--profile " prod "` selects `prod`.
    if let Some(profile) = cli
        .profile
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
    {
        loader = loader.with_profile(profile);
    }

    match cli.source {
        SourceKind::File => match &cli.base_dir {
            Some(dir) => loader.with_source(FileSource::with_base_dir(dir)),
            None => loader.with_source(FileSource::new()),
        },
        SourceKind::SearchPath if cli.resource_roots.is_empty() => {
            loader.with_source(SearchPathSource::from_env())
        }
        SourceKind::SearchPath => {
            loader.with_source(SearchPathSource::new(cli.resource_roots.iter().cloned()))
        }
    }
}
