//! Profile name to filename resolution.
//!
//! Invariants:
//! - An unset profile resolves to `default.properties`.
//! - The `.properties` suffix is appended only when missing; it is never doubled.

use crate::constants::{DEFAULT_PROFILE, PROPERTIES_SUFFIX};

/// Resolve a profile name to the filename that will be opened.
///
/// `None` selects the default profile. The name is otherwise used verbatim,
/// so an explicitly empty profile resolves to `.properties`.
pub fn resolve_filename(profile: Option<&str>) -> String {
    let profile = profile.unwrap_or(DEFAULT_PROFILE);
    if profile.ends_with(PROPERTIES_SUFFIX) {
        profile.to_string()
    } else {
        format!("{profile}{PROPERTIES_SUFFIX}")
    }
}
