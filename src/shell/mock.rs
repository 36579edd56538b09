//! Scripted tool runner for testing.
//!
//! [`ScriptedRunner`] implements [`ToolRunner`] without launching processes.
//! Tests register responses keyed by a substring of the command line, and the
//! runner records every invocation for later assertion.
//!
//! # Example
//!
//! ```
//! use basecamp::shell::{ScriptedRunner, ToolRunner};
//!
//! let runner = ScriptedRunner::new();
//! runner.fail_with("-m venv", 1, "ensurepip is not available");
//!
//! let out = runner.run("python3", &["-m", "venv", "/tmp/env"], None).unwrap();
//! assert!(!out.success);
//! assert!(runner.has_call("-m venv"));
//! ```

use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use crate::error::{Result, SetupError};

use super::{ToolOutput, ToolRunner};

/// A canned response for one scripted invocation.
#[derive(Debug, Clone)]
pub enum ScriptedResponse {
    /// Return this captured output.
    Output(ToolOutput),
    /// Fail as if the program could not be launched.
    LaunchFailure(String),
    /// Fail as if the operator interrupted the tool.
    Interrupt,
}

struct Rule {
    matcher: String,
    responses: VecDeque<ScriptedResponse>,
}

/// Fake [`ToolRunner`] with substring-matched, queued responses.
///
/// Any invocation that matches no rule succeeds with empty output, so tests
/// only script the calls they care about. Responses for the same matcher are
/// returned in registration order.
#[derive(Default)]
pub struct ScriptedRunner {
    rules: Mutex<Vec<Rule>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    /// Create a runner where every unscripted call succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for command lines containing `matcher`.
    pub fn respond(&self, matcher: &str, response: ScriptedResponse) {
        let mut rules = self.rules.lock().unwrap();
        if let Some(rule) = rules.iter_mut().find(|r| r.matcher == matcher) {
            rule.responses.push_back(response);
        } else {
            rules.push(Rule {
                matcher: matcher.to_string(),
                responses: VecDeque::from([response]),
            });
        }
    }

    /// Queue a success with the given stdout.
    pub fn succeed_with(&self, matcher: &str, stdout: &str) {
        self.respond(
            matcher,
            ScriptedResponse::Output(ToolOutput::success(
                stdout.to_string(),
                String::new(),
                Duration::ZERO,
            )),
        );
    }

    /// Queue a failure with the given exit code and stderr.
    pub fn fail_with(&self, matcher: &str, exit_code: i32, stderr: &str) {
        self.respond(
            matcher,
            ScriptedResponse::Output(ToolOutput::failure(
                exit_code,
                String::new(),
                stderr.to_string(),
                Duration::ZERO,
            )),
        );
    }

    /// Queue a launch failure (program not found).
    pub fn unavailable(&self, matcher: &str) {
        self.respond(
            matcher,
            ScriptedResponse::LaunchFailure("No such file or directory".to_string()),
        );
    }

    /// Queue an operator interrupt.
    pub fn interrupt_on(&self, matcher: &str) {
        self.respond(matcher, ScriptedResponse::Interrupt);
    }

    /// All recorded command lines, in invocation order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Whether any recorded command line contains `needle`.
    pub fn has_call(&self, needle: &str) -> bool {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.contains(needle))
    }

    /// Number of recorded command lines containing `needle`.
    pub fn call_count(&self, needle: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.contains(needle))
            .count()
    }
}

impl ToolRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str], _cwd: Option<&Path>) -> Result<ToolOutput> {
        let line = if args.is_empty() {
            program.to_string()
        } else {
            format!("{} {}", program, args.join(" "))
        };
        self.calls.lock().unwrap().push(line.clone());

        let response = {
            let mut rules = self.rules.lock().unwrap();
            rules
                .iter_mut()
                .filter(|r| line.contains(&r.matcher))
                .find_map(|r| r.responses.pop_front())
        };

        match response {
            Some(ScriptedResponse::Output(out)) => Ok(out),
            Some(ScriptedResponse::LaunchFailure(message)) => Err(SetupError::ToolLaunchFailed {
                program: program.to_string(),
                message,
            }),
            Some(ScriptedResponse::Interrupt) => Err(SetupError::Interrupted),
            None => Ok(ToolOutput::success(
                String::new(),
                String::new(),
                Duration::ZERO,
            )),
        }
    }
}
