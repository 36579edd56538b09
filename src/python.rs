//! Host Python interpreter discovery and version gating.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{Result, SetupError};
use crate::shell::ToolRunner;

/// Minimum supported interpreter version.
pub const MIN_PYTHON: (u32, u32) = (3, 8);

/// Interpreter names probed on PATH, in order.
const CANDIDATES: [&str; 2] = ["python3", "python"];

/// A usable host Python interpreter.
#[derive(Debug, Clone)]
pub struct PythonInterpreter {
    /// Program name resolved on PATH (`python3` or `python`).
    pub program: String,
    /// Parsed (major, minor).
    pub version: (u32, u32),
    /// Version string as reported, e.g. "3.11.4".
    pub display_version: String,
}

impl PythonInterpreter {
    /// Whether this interpreter meets the supported minimum.
    pub fn is_supported(&self) -> bool {
        self.version >= MIN_PYTHON
    }
}

/// Locate a host interpreter by probing `python3` then `python`.
pub fn locate(runner: &dyn ToolRunner) -> Result<PythonInterpreter> {
    for candidate in CANDIDATES {
        match runner.run(candidate, &["--version"], None) {
            Ok(output) if output.success => {
                // Old interpreters print the version banner to stderr.
                if let Some(python) = parse_version(candidate, &output.combined()) {
                    debug!("found {} ({})", python.program, python.display_version);
                    return Ok(python);
                }
            }
            Ok(_) => {}
            Err(SetupError::ToolLaunchFailed { .. }) => {}
            Err(e) => return Err(e),
        }
    }

    Err(SetupError::PythonNotFound {
        tried: CANDIDATES.join(", "),
    })
}

/// Halt the workflow if the interpreter is below the supported minimum.
pub fn check_version(python: &PythonInterpreter) -> Result<()> {
    if python.is_supported() {
        Ok(())
    } else {
        Err(SetupError::PythonTooOld {
            found: format!("{}.{}", python.version.0, python.version.1),
        })
    }
}

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Python (\d+)\.(\d+)(?:\.(\d+))?").expect("valid version regex"));

fn parse_version(program: &str, banner: &str) -> Option<PythonInterpreter> {
    let caps = VERSION_RE.captures(banner)?;

    let major: u32 = caps[1].parse().ok()?;
    let minor: u32 = caps[2].parse().ok()?;
    let display_version = caps[0].trim_start_matches("Python ").to_string();

    Some(PythonInterpreter {
        program: program.to_string(),
        version: (major, minor),
        display_version,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::ScriptedRunner;

    #[test]
    fn parses_standard_banner() {
        let python = parse_version("python3", "Python 3.11.4\n").unwrap();
        assert_eq!(python.version, (3, 11));
        assert_eq!(python.display_version, "3.11.4");
    }

    #[test]
    fn parses_banner_without_patch() {
        let python = parse_version("python", "Python 3.8").unwrap();
        assert_eq!(python.version, (3, 8));
    }

    #[test]
    fn rejects_garbage_banner() {
        assert!(parse_version("python3", "not a version").is_none());
    }

    #[test]
    fn supported_at_exact_minimum() {
        let python = parse_version("python3", "Python 3.8.0").unwrap();
        assert!(python.is_supported());
        assert!(check_version(&python).is_ok());
    }

    #[test]
    fn gate_rejects_old_interpreter() {
        let python = parse_version("python3", "Python 3.6.9").unwrap();
        let err = check_version(&python).unwrap_err();
        assert!(matches!(err, SetupError::PythonTooOld { .. }));
        assert!(err.to_string().contains("3.6"));
    }

    #[test]
    fn gate_rejects_python2() {
        let python = parse_version("python", "Python 2.7.18").unwrap();
        assert!(check_version(&python).is_err());
    }

    #[test]
    fn locate_prefers_python3() {
        let runner = ScriptedRunner::new();
        runner.succeed_with("python3 --version", "Python 3.10.2\n");

        let python = locate(&runner).unwrap();
        assert_eq!(python.program, "python3");
        assert_eq!(python.version, (3, 10));
    }

    #[test]
    fn locate_falls_back_to_python() {
        let runner = ScriptedRunner::new();
        runner.unavailable("python3 --version");
        runner.succeed_with("python --version", "Python 3.9.7\n");

        let python = locate(&runner).unwrap();
        assert_eq!(python.program, "python");
    }

    #[test]
    fn locate_reports_candidates_when_none_found() {
        let runner = ScriptedRunner::new();
        runner.unavailable("python3 --version");
        runner.unavailable("python --version");

        let err = locate(&runner).unwrap_err();
        assert!(matches!(err, SetupError::PythonNotFound { .. }));
        assert!(err.to_string().contains("python3"));
    }

    #[test]
    fn locate_propagates_interrupt() {
        let runner = ScriptedRunner::new();
        runner.interrupt_on("python3 --version");

        let err = locate(&runner).unwrap_err();
        assert!(matches!(err, SetupError::Interrupted));
    }
}
