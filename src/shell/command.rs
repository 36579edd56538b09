//! Tool execution against real processes.

use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::atomic::Ordering;
use std::time::Instant;

use tracing::debug;

use crate::error::{Result, SetupError};
use crate::interrupt::InterruptFlag;

use super::{ToolOutput, ToolRunner};

/// [`ToolRunner`] backed by `std::process::Command`.
///
/// Programs are invoked directly (no shell), with stdout and stderr captured.
#[derive(Debug, Default)]
pub struct SystemRunner {
    interrupt: InterruptFlag,
}

impl SystemRunner {
    /// Create a runner with no external interrupt source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner that honors the installed Ctrl-C flag.
    pub fn with_interrupt(interrupt: InterruptFlag) -> Self {
        Self { interrupt }
    }
}

impl ToolRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<ToolOutput> {
        let start = Instant::now();

        let mut cmd = Command::new(program);
        cmd.args(args);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        if let Some(cwd) = cwd {
            cmd.current_dir(cwd);
        }

        debug!("running: {} {}", program, args.join(" "));

        let output = cmd.output().map_err(|e| SetupError::ToolLaunchFailed {
            program: program.to_string(),
            message: e.to_string(),
        })?;

        let duration = start.elapsed();
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        // Ctrl-C reaches the whole foreground process group; whether the
        // child died of the signal or ran to completion first, the operator
        // asked to stop.
        if self.interrupt.load(Ordering::SeqCst) {
            return Err(SetupError::Interrupted);
        }

        // A None exit code means the child was killed by a signal, which in
        // this single-run workflow only happens when the operator interrupts.
        let Some(code) = output.status.code() else {
            return Err(SetupError::Interrupted);
        };

        debug!("finished: {} (exit {}, {:?})", program, code, duration);

        if output.status.success() {
            Ok(ToolOutput::success(stdout, stderr, duration))
        } else {
            Ok(ToolOutput::failure(code, stdout, stderr, duration))
        }
    }
}
