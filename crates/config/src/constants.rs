//! Centralized constants for the PropManager workspace.
//!
//! This module contains the literal names and defaults shared by the loader,
//! the sources and the CLI so they are spelled in exactly one place.

// =============================================================================
// Profile Resolution
// =============================================================================

/// Name of the external setting that selects the profile to load.
pub const PROFILE_ENV_VAR: &str = "profile";

/// Profile used when the profile setting is unset.
pub const DEFAULT_PROFILE: &str = "default";

/// Extension appended to a profile name that does not already carry it.
pub const PROPERTIES_SUFFIX: &str = ".properties";

// =============================================================================
// Sources
// =============================================================================

/// Path list of resource roots searched by `SearchPathSource::from_env`.
///
/// Uses the platform path-list syntax (`:` on Unix, `;` on Windows).
pub const RESOURCE_PATH_ENV_VAR: &str = "PROPMANAGER_RESOURCE_PATH";

// =============================================================================
// Dotenv
// =============================================================================

/// Setting `DOTENV_DISABLED=1` (or `true`) skips `.env` loading entirely.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";
