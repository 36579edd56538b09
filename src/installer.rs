//! Dependency installation into the virtual environment.
//!
//! Three sub-steps: upgrade pip (advisory), ensure the manifest exists, then
//! install every manifest entry (fatal on failure). Only the final install
//! can halt the workflow.

use std::fs;

use tracing::{info, warn};

use crate::context::ProjectContext;
use crate::error::{Result, SetupError};
use crate::manifest;
use crate::report;
use crate::shell::ToolRunner;
use crate::ui::UserInterface;

/// What the installer did, for the final summary.
#[derive(Debug, Clone)]
pub struct InstallReport {
    /// Whether the pip upgrade sub-step succeeded.
    pub pip_upgraded: bool,
    /// Whether a default manifest had to be synthesized.
    pub manifest_created: bool,
    /// Number of packages listed in the manifest.
    pub package_count: usize,
}

/// Installs manifest entries into the isolated environment.
pub struct DependencyInstaller<'a> {
    ctx: &'a ProjectContext,
    runner: &'a dyn ToolRunner,
}

impl<'a> DependencyInstaller<'a> {
    /// Create an installer for the given project.
    pub fn new(ctx: &'a ProjectContext, runner: &'a dyn ToolRunner) -> Self {
        Self { ctx, runner }
    }

    /// Run the full install sequence.
    pub fn install(&self, ui: &mut dyn UserInterface) -> Result<InstallReport> {
        let python = self.ctx.venv_python();
        let python_arg = python.display().to_string();

        // Upgrade pip first. Failure here is advisory only.
        let mut spinner = ui.start_spinner("Upgrading pip...");
        let pip_upgraded = match self.runner.run(
            &python_arg,
            &["-m", "pip", "install", "--upgrade", "pip"],
            Some(self.ctx.root()),
        ) {
            Ok(output) if output.success => {
                spinner.finish_success("Pip upgraded successfully");
                report::echo_tool_output(ui, &output);
                true
            }
            Ok(output) => {
                spinner.finish_warning("Failed to upgrade pip, continuing");
                warn!("pip upgrade failed: {}", output.combined());
                ui.warning("Warning: failed to upgrade pip; continuing with the bundled version");
                report::echo_tool_output(ui, &output);
                false
            }
            Err(SetupError::Interrupted) => return Err(SetupError::Interrupted),
            Err(e) => {
                spinner.finish_warning("Failed to upgrade pip, continuing");
                warn!("pip upgrade failed: {}", e);
                ui.warning("Warning: failed to upgrade pip; continuing with the bundled version");
                false
            }
        };

        let manifest_path = self.ctx.manifest_path();
        let manifest_created = manifest::ensure(&manifest_path)?;
        if manifest_created {
            ui.warning("requirements.txt not found, created one with default dependencies");
        }

        let contents = fs::read_to_string(&manifest_path)?;
        let package_count = manifest::parse(&contents).len();

        let mut spinner = ui.start_spinner(&format!(
            "Installing {} packages from requirements.txt...",
            package_count
        ));
        let output = self.runner.run(
            &python_arg,
            &["-m", "pip", "install", "-r", "requirements.txt"],
            Some(self.ctx.root()),
        )?;

        if !output.success {
            spinner.finish_error("Failed to install dependencies");
            return Err(SetupError::InstallFailed {
                output: output.combined(),
            });
        }

        spinner.finish_success("Dependencies installed successfully");
        report::echo_tool_output(ui, &output);
        info!("installed {} packages", package_count);

        Ok(InstallReport {
            pip_upgraded,
            manifest_created,
            package_count,
        })
    }
}
