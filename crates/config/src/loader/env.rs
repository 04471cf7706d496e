//! Environment variable handling for store loading.
//!
//! Responsibilities:
//! - Read the `profile` setting and apply it to a StoreLoader.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Invariants:
//! - An explicitly configured profile is never replaced by the environment.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).

use super::builder::StoreLoader;
use crate::constants::PROFILE_ENV_VAR;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply the `profile` environment variable unless a profile is already set.
pub fn apply_env(loader: &mut StoreLoader) {
    if loader.profile().is_some() {
        return;
    }
    // Surrounding whitespace is dropped from the profile name, so
    // `profile=" prod "` selects `prod.properties`.
    if let Some(profile) = env_var_or_none(PROFILE_ENV_VAR) {
        tracing::debug!(profile = %profile, "Profile selected from environment");
        loader.set_profile(Some(profile));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_empty_and_whitespace_strings() {
        let key = "_PROPMANAGER_TEST_VAR";

        temp_env::with_var_unset(key, || {
            assert!(env_var_or_none(key).is_none(), "Unset env var should return None");
        });

        temp_env::with_vars([(key, Some(""))], || {
            assert!(env_var_or_none(key).is_none(), "Empty env var should return None");
        });

        temp_env::with_vars([(key, Some("   "))], || {
            assert!(
                env_var_or_none(key).is_none(),
                "Whitespace-only env var should return None"
            );
        });

        temp_env::with_vars([(key, Some(" test-value "))], || {
            assert_eq!(env_var_or_none(key), Some("test-value".to_string()));
        });
    }
}
