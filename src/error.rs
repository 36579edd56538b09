//! Error types for Basecamp operations.
//!
//! This module defines [`SetupError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every variant except [`SetupError::Interrupted`] is fatal: it propagates
//!   up to `main`, which prints it and exits non-zero
//! - Advisory failures (pip upgrade, import probes) never become errors; they
//!   are recorded on the run summary instead
//! - All errors should provide actionable messages for operators

use thiserror::Error;

/// Core error type for Basecamp operations.
#[derive(Debug, Error)]
pub enum SetupError {
    /// No Python interpreter could be found on PATH.
    #[error("No Python interpreter found (tried {tried}). Install Python 3.8 or higher.")]
    PythonNotFound { tried: String },

    /// The host interpreter is older than the supported minimum.
    #[error("Python 3.8 or higher is required (found {found})")]
    PythonTooOld { found: String },

    /// `python -m venv` reported a non-zero status.
    #[error("Failed to create virtual environment:\n{output}")]
    VenvCreateFailed { output: String },

    /// `pip install -r requirements.txt` reported a non-zero status.
    #[error("Failed to install dependencies:\n{output}")]
    InstallFailed { output: String },

    /// An external tool could not be launched at all.
    #[error("Could not launch '{program}': {message}")]
    ToolLaunchFailed { program: String, message: String },

    /// The operator interrupted the run (Ctrl-C at a prompt, or a
    /// signal-killed subprocess).
    #[error("Setup interrupted by operator")]
    Interrupted,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Basecamp operations.
pub type Result<T> = std::result::Result<T, SetupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn python_not_found_lists_candidates() {
        let err = SetupError::PythonNotFound {
            tried: "python3, python".into(),
        };
        assert!(err.to_string().contains("python3, python"));
    }

    #[test]
    fn python_too_old_displays_found_version() {
        let err = SetupError::PythonTooOld {
            found: "3.6".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("3.8"));
        assert!(msg.contains("3.6"));
    }

    #[test]
    fn venv_create_failed_carries_diagnostics() {
        let err = SetupError::VenvCreateFailed {
            output: "ensurepip is not available".into(),
        };
        assert!(err.to_string().contains("ensurepip is not available"));
    }

    #[test]
    fn install_failed_carries_diagnostics() {
        let err = SetupError::InstallFailed {
            output: "No matching distribution found for tensorflow==2.13.0".into(),
        };
        assert!(err.to_string().contains("tensorflow==2.13.0"));
    }

    #[test]
    fn tool_launch_failed_displays_program() {
        let err = SetupError::ToolLaunchFailed {
            program: "python3".into(),
            message: "permission denied".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("python3"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn interrupted_has_distinct_message() {
        let err = SetupError::Interrupted;
        assert!(err.to_string().contains("interrupted"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: SetupError = io_err.into();
        assert!(matches!(err, SetupError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(SetupError::Interrupted)
        }
        assert!(returns_error().is_err());
    }
}
