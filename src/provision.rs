//! Provisioning orchestration.
//!
//! The workflow is a linear state machine with two kinds of step results:
//! fatal failures surface as `Err` and halt the run immediately, advisory
//! degradations are collected on the summary and only soften the final
//! message. The sequence is fixed:
//!
//! version gate → environment → dependencies → scaffold → verification

use tracing::info;

use crate::context::ProjectContext;
use crate::error::Result;
use crate::installer::{DependencyInstaller, InstallReport};
use crate::python::{self, PythonInterpreter};
use crate::report;
use crate::scaffold;
use crate::shell::ToolRunner;
use crate::ui::UserInterface;
use crate::venv::{EnvAction, EnvironmentManager};
use crate::verify::{self, VerificationRecord};

/// Outcome of a single provisioning step.
///
/// Fatal failures are not represented here; they are `Err` values that halt
/// the workflow. This type only distinguishes clean completion from advisory
/// degradation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Step finished cleanly.
    Completed,
    /// Step finished, but these advisories belong in the final summary.
    Degraded(Vec<String>),
}

/// Everything the reporter needs about a finished run.
#[derive(Debug, Clone)]
pub struct ProvisionSummary {
    /// The interpreter used for the environment.
    pub python: PythonInterpreter,
    /// What happened to the virtual environment.
    pub env_action: EnvAction,
    /// Install sub-step results.
    pub install: InstallReport,
    /// Import probe results.
    pub verification: VerificationRecord,
    /// Advisory notes collected along the way.
    pub advisories: Vec<String>,
}

impl ProvisionSummary {
    /// Whether the run completed without any advisory degradation.
    pub fn is_clean(&self) -> bool {
        self.advisories.is_empty() && self.verification.all_passed()
    }
}

/// Runs the whole provisioning workflow against one project.
pub struct Provisioner<'a> {
    ctx: ProjectContext,
    runner: &'a dyn ToolRunner,
}

impl<'a> Provisioner<'a> {
    /// Create a provisioner for the given project.
    pub fn new(ctx: ProjectContext, runner: &'a dyn ToolRunner) -> Self {
        Self { ctx, runner }
    }

    /// The project being provisioned.
    pub fn context(&self) -> &ProjectContext {
        &self.ctx
    }

    /// Run every step in order. Returns the summary on success; any `Err`
    /// means the workflow halted at a fatal step.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<ProvisionSummary> {
        let mut advisories: Vec<String> = Vec::new();

        report::print_banner(ui);

        // Version gate: fatal if unmet, probe failure included.
        let python = python::locate(self.runner)?;
        report::print_host_facts(ui, &self.ctx, &python);
        python::check_version(&python)?;
        ui.success(&format!(
            "Python version {} is compatible",
            python.display_version
        ));

        // Environment: fatal on creation failure.
        let env_action = EnvironmentManager::new(&self.ctx, self.runner, &python).ensure(ui)?;
        info!("environment step finished: {:?}", env_action);

        // Dependencies: pip upgrade inside is advisory, install is fatal.
        let install = DependencyInstaller::new(&self.ctx, self.runner).install(ui)?;
        if !install.pip_upgraded {
            advisories.push("pip could not be upgraded".to_string());
        }

        // Scaffold: idempotent, never fails the run beyond IO errors.
        scaffold::ensure_image_library(&self.ctx, ui)?;

        // Verification: individual failures are advisory.
        let verification = verify::verify(&self.ctx, self.runner, ui)?;
        match step_outcome_for_verification(&verification) {
            StepOutcome::Completed => {}
            StepOutcome::Degraded(notes) => advisories.extend(notes),
        }

        let summary = ProvisionSummary {
            python,
            env_action,
            install,
            verification,
            advisories,
        };

        report::print_next_steps(ui, &self.ctx, &summary);
        Ok(summary)
    }
}

fn step_outcome_for_verification(record: &VerificationRecord) -> StepOutcome {
    let failures = record.failures();
    if failures.is_empty() {
        StepOutcome::Completed
    } else {
        StepOutcome::Degraded(
            failures
                .iter()
                .map(|name| format!("{} did not import cleanly", name))
                .collect(),
        )
    }
}
