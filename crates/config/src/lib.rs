//! Profile-selected properties loading for PropManager.
//!
//! This crate resolves a profile name to a `.properties` file, loads it once
//! through a pluggable [`PropertySource`], and serves read-only lookups from
//! the resulting [`PropertyStore`].
//!
//! ```rust,ignore
//! let store = StoreLoader::new().from_env().build()?;
//! let host = store.get_or("db.host", "localhost");
//! ```

pub mod constants;
mod loader;
pub mod properties;
pub mod source;
mod store;

pub use loader::{ConfigLoadError, DotenvError, StoreLoader, env_var_or_none, resolve_filename};
pub use properties::ParseError;
pub use source::{BundledSource, FileSource, PropertySource, SearchPathSource, SourceError};
pub use store::PropertyStore;
