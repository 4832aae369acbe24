//! ruff subprocess adapter

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::application::ports::{RunnerError, ToolRunner};
use crate::domain::RunOutcome;

/// Runs the ruff binary, capturing and mirroring its output.
///
/// Both streams are captured so the outcome can be scanned for failure
/// markers, then written back to the real stdout/stderr byte for byte so
/// the caller sees exactly what a direct invocation would print.
pub struct RuffRunner {
    program: PathBuf,
}

impl RuffRunner {
    /// Create a runner for the `ruff` binary resolved on the search path
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("ruff"),
        }
    }

    /// Create a runner for an arbitrary program (used by tests)
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn tool_name(&self) -> String {
        self.program.display().to_string()
    }

    fn launch_failed(&self, message: impl ToString) -> RunnerError {
        RunnerError::LaunchFailed {
            tool: self.tool_name(),
            message: message.to_string(),
        }
    }
}

impl Default for RuffRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRunner for RuffRunner {
    fn run(&self, args: &[OsString]) -> Result<RunOutcome, RunnerError> {
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::inherit())
            .output()
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    RunnerError::ToolNotFound(self.tool_name())
                } else {
                    self.launch_failed(e)
                }
            })?;

        // Mirror the captured streams unchanged
        io::stdout()
            .write_all(&output.stdout)
            .and_then(|()| io::stdout().flush())
            .map_err(|e| self.launch_failed(e))?;
        io::stderr()
            .write_all(&output.stderr)
            .and_then(|()| io::stderr().flush())
            .map_err(|e| self.launch_failed(e))?;

        Ok(RunOutcome {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code: output.status.code().unwrap_or(1),
        })
    }
}
