//! Store loader for profile-selected properties files.
//!
//! Responsibilities:
//! - Resolve the profile name from builder overrides, environment, or the default.
//! - Normalize the profile name to a `.properties` filename.
//! - Open the file through a `PropertySource`, parse it, and build a `PropertyStore`.
//! - Enforce the `DOTENV_DISABLED` gate before loading a `.env` file.
//!
//! Does NOT handle:
//! - Properties syntax (see `properties`).
//! - Where bytes come from (see `source`).
//!
//! Invariants / Assumptions:
//! - Builder overrides take precedence over the environment; the environment over the default.
//! - Loading happens once per `build()`; a failed build yields no store.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;
mod profile;

#[cfg(test)]
mod tests;

pub use builder::StoreLoader;
pub use env::env_var_or_none;
pub use error::{ConfigLoadError, DotenvError};
pub use profile::resolve_filename;
