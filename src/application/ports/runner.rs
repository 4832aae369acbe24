//! Tool runner port interface

use std::ffi::OsString;

use thiserror::Error;

use crate::domain::RunOutcome;

/// Errors from invoking the wrapped tool.
///
/// Both variants abort the wrapper with the reserved exit code; they are
/// the only conditions under which the propagated status is not the
/// wrapped tool's own.
#[derive(Debug, Clone, Error)]
pub enum RunnerError {
    #[error("'{0}' executable not found")]
    ToolNotFound(String),

    #[error("Failed to run '{tool}': {message}")]
    LaunchFailed { tool: String, message: String },
}

/// Port for running the wrapped tool.
///
/// Implementations invoke the tool exactly once with the given arguments,
/// capture both output streams, re-emit them unchanged to the real
/// stdout/stderr, and report the tool's exit code in the outcome.
pub trait ToolRunner {
    /// Run the tool with the given arguments, blocking until it exits
    fn run(&self, args: &[OsString]) -> Result<RunOutcome, RunnerError>;
}
