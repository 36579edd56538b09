//! Basecamp - one-command runtime provisioning.
//!
//! Basecamp automates the first-time setup of the Python runtime that the
//! emotion recognition application expects: an isolated virtual environment,
//! pinned dependencies from `requirements.txt`, a scaffolded face-image
//! directory, and an import check of the critical packages.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`context`] - Project paths and host-platform facts
//! - [`error`] - Error types and result aliases
//! - [`installer`] - Dependency installation into the environment
//! - [`interrupt`] - Ctrl-C detection shared with the tool runner
//! - [`manifest`] - Dependency manifest synthesis and parsing
//! - [`provision`] - Step orchestration and fatal/advisory policy
//! - [`python`] - Host interpreter discovery and version gating
//! - [`report`] - Operator-facing progress and result messages
//! - [`scaffold`] - Face-image library scaffolding
//! - [`shell`] - External tool execution
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//! - [`venv`] - Virtual environment creation and reuse
//! - [`verify`] - Post-install import verification
//!
//! # Example
//!
//! ```no_run
//! use basecamp::context::ProjectContext;
//! use basecamp::provision::Provisioner;
//! use basecamp::shell::SystemRunner;
//! use basecamp::ui::{create_ui, OutputMode};
//!
//! let ctx = ProjectContext::new(std::env::current_dir().unwrap());
//! let runner = SystemRunner::new();
//! let mut ui = create_ui(true, OutputMode::Normal);
//!
//! let summary = Provisioner::new(ctx, &runner).run(ui.as_mut()).unwrap();
//! assert!(summary.verification.checks.len() > 0);
//! ```

pub mod cli;
pub mod context;
pub mod error;
pub mod installer;
pub mod interrupt;
pub mod manifest;
pub mod provision;
pub mod python;
pub mod report;
pub mod scaffold;
pub mod shell;
pub mod ui;
pub mod venv;
pub mod verify;

pub use error::{Result, SetupError};
