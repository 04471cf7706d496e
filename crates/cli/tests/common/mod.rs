//! Shared test utilities for propmanager integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Write profile fixtures into temporary directories.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - The command runs inside the given directory, so relative profiles resolve there.

use std::path::Path;

use assert_cmd::Command;

/// Returns a hermetic `propmanager` command running in `dir`.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `profile` and `PROPMANAGER_RESOURCE_PATH` are cleared so the host cannot leak in.
pub fn propmanager_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("propmanager");

    cmd.current_dir(dir)
        .env("DOTENV_DISABLED", "1")
        .env_remove("profile")
        .env_remove("PROPMANAGER_RESOURCE_PATH")
        .env_remove("RUST_LOG");

    cmd
}

/// Writes `default.properties` and `prod.properties` into `dir`.
pub fn write_profiles(dir: &Path) {
    std::fs::write(
        dir.join("default.properties"),
        "# default profile\ndb.host=localhost\ndb.port=5432\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("prod.properties"),
        "db.host=db.prod.internal\ndb.port=6432\nmotd=caf\\u00e9\n",
    )
    .unwrap();
}
