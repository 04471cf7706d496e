//! Tests for the store loader.
//!
//! Responsibilities:
//! - Test the load sequence against bundled and filesystem sources.
//! - Test profile selection precedence (builder > environment > default).
//! - Test failure reporting for missing and malformed sources.
//! - Test dotenv loading and the `DOTENV_DISABLED` gate.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
