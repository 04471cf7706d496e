//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map load failures found in an error chain to their exit code.
//!
//! Invariants:
//! - Exit code 2 is left to clap for usage errors.

use propmanager_config::ConfigLoadError;

/// Structured exit codes for propmanager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// The properties file could not be opened or parsed.
    LoadFailed = 3,

    /// `get` found no value and no `--default` was given.
    KeyNotFound = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError unless a known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        if self
            .chain()
            .any(|cause| cause.downcast_ref::<ConfigLoadError>().is_some())
        {
            ExitCode::LoadFailed
        } else {
            ExitCode::GeneralError
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use propmanager_config::{BundledSource, StoreLoader};

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::LoadFailed.as_i32(), 3);
        assert_eq!(ExitCode::KeyNotFound.as_i32(), 4);
    }

    #[test]
    fn test_load_error_maps_to_load_failed() {
        let err = StoreLoader::new()
            .with_profile("absent")
            .with_source(BundledSource::new())
            .build()
            .unwrap_err();

        let err = anyhow::Error::new(err);
        assert_eq!(err.exit_code(), ExitCode::LoadFailed);

        let wrapped = err.context("while starting up");
        assert_eq!(wrapped.exit_code(), ExitCode::LoadFailed);
    }

    #[test]
    fn test_other_errors_are_general() {
        let err: anyhow::Error = Err::<(), _>(std::io::Error::other("boom"))
            .context("writing output")
            .unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
