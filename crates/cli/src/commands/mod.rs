//! CLI command implementations.
//!
//! Each command writes its output to the supplied writer and returns the
//! exit code for the process.

pub mod get;
pub mod list;
pub mod resolve;
