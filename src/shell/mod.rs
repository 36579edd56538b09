//! External tool execution.
//!
//! Every external step (venv creation, pip install, import probes) goes
//! through the [`ToolRunner`] trait so tests can substitute a scripted fake
//! without launching real processes. See [`ScriptedRunner`].

pub mod command;
pub mod mock;

pub use command::SystemRunner;
pub use mock::{ScriptedRunner, ScriptedResponse};

use std::path::Path;
use std::time::Duration;

use crate::error::Result;

/// Captured result of running an external tool to completion.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Exit code reported by the tool.
    pub exit_code: i32,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the tool succeeded (exit code 0).
    pub success: bool,
}

impl ToolOutput {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: 0,
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32, stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// Stdout and stderr joined, for diagnostics.
    pub fn combined(&self) -> String {
        let mut out = self.stdout.clone();
        if !self.stderr.is_empty() {
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(&self.stderr);
        }
        out
    }
}

/// Abstract "run external tool, capture status + output" capability.
///
/// Implementations block until the tool exits. A tool killed by a signal is
/// reported as [`crate::SetupError::Interrupted`]; a tool that cannot be
/// launched at all is [`crate::SetupError::ToolLaunchFailed`].
pub trait ToolRunner {
    /// Run `program` with `args`, optionally in `cwd`, capturing all output.
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<ToolOutput>;
}
