//! Virtual environment creation and reuse.
//!
//! Owns the workflow's only interactive decision: when an environment
//! already exists, the operator chooses to recreate it or keep it. The
//! default (empty input, non-interactive mode) is to keep it.

use std::fs;

use tracing::info;

use crate::context::ProjectContext;
use crate::error::{Result, SetupError};
use crate::python::PythonInterpreter;
use crate::report;
use crate::shell::ToolRunner;
use crate::ui::{ConfirmPrompt, UserInterface};

/// What `ensure` did to the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvAction {
    /// No environment existed; one was created.
    Created,
    /// An environment existed and the operator kept it.
    Reused,
    /// An environment existed; it was deleted and recreated.
    Recreated,
}

/// Creates or reuses the isolated environment.
pub struct EnvironmentManager<'a> {
    ctx: &'a ProjectContext,
    runner: &'a dyn ToolRunner,
    python: &'a PythonInterpreter,
}

impl<'a> EnvironmentManager<'a> {
    /// Create a manager for the given project.
    pub fn new(
        ctx: &'a ProjectContext,
        runner: &'a dyn ToolRunner,
        python: &'a PythonInterpreter,
    ) -> Self {
        Self {
            ctx,
            runner,
            python,
        }
    }

    /// Ensure a usable environment exists at the conventional path.
    ///
    /// Creation failures are fatal; the captured tool output travels in the
    /// returned error.
    pub fn ensure(&self, ui: &mut dyn UserInterface) -> Result<EnvAction> {
        let path = self.ctx.venv_path();

        if path.exists() {
            ui.warning(&format!(
                "Virtual environment already exists at {}",
                path.display()
            ));

            let prompt = ConfirmPrompt::new("recreate_env", "Do you want to recreate it?", false);
            if !ui.confirm(&prompt)? {
                ui.success("Using existing virtual environment");
                return Ok(EnvAction::Reused);
            }

            ui.message("Removing existing virtual environment...");
            fs::remove_dir_all(path)?;
            info!("removed {}", path.display());

            self.create(ui)?;
            return Ok(EnvAction::Recreated);
        }

        self.create(ui)?;
        Ok(EnvAction::Created)
    }

    fn create(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let path = self.ctx.venv_path();
        let path_arg = path.display().to_string();

        let mut spinner = ui.start_spinner("Creating virtual environment...");
        let output = self
            .runner
            .run(&self.python.program, &["-m", "venv", &path_arg], None)?;

        if !output.success {
            spinner.finish_error("Failed to create virtual environment");
            return Err(SetupError::VenvCreateFailed {
                output: output.combined(),
            });
        }

        spinner.finish_success("Virtual environment created successfully");
        report::echo_tool_output(ui, &output);
        info!("created venv at {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::ScriptedRunner;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn test_python() -> PythonInterpreter {
        PythonInterpreter {
            program: "python3".to_string(),
            version: (3, 11),
            display_version: "3.11.4".to_string(),
        }
    }

    fn context_in(temp: &TempDir) -> ProjectContext {
        ProjectContext::with_platform(temp.path().to_path_buf(), false)
    }

    #[test]
    fn creates_when_absent_and_never_prompts() {
        let temp = TempDir::new().unwrap();
        let ctx = context_in(&temp);
        let runner = ScriptedRunner::new();
        let python = test_python();
        let mut ui = MockUI::new();

        let manager = EnvironmentManager::new(&ctx, &runner, &python);
        let action = manager.ensure(&mut ui).unwrap();

        assert_eq!(action, EnvAction::Created);
        assert!(ui.confirms_shown().is_empty());
        assert_eq!(runner.call_count("-m venv"), 1);
    }

    #[test]
    fn reuses_on_default_answer_without_touching_env() {
        let temp = TempDir::new().unwrap();
        let ctx = context_in(&temp);
        std::fs::create_dir(ctx.venv_path()).unwrap();
        std::fs::write(ctx.venv_path().join("pyvenv.cfg"), "home = /usr").unwrap();

        let runner = ScriptedRunner::new();
        let python = test_python();
        let mut ui = MockUI::new();

        let manager = EnvironmentManager::new(&ctx, &runner, &python);
        let action = manager.ensure(&mut ui).unwrap();

        assert_eq!(action, EnvAction::Reused);
        assert_eq!(ui.confirms_shown(), &["recreate_env"]);
        assert!(!runner.has_call("-m venv"));
        // Existing environment left byte-for-byte untouched
        assert_eq!(
            std::fs::read_to_string(ctx.venv_path().join("pyvenv.cfg")).unwrap(),
            "home = /usr"
        );
    }

    #[test]
    fn recreates_on_affirmative_answer() {
        let temp = TempDir::new().unwrap();
        let ctx = context_in(&temp);
        std::fs::create_dir(ctx.venv_path()).unwrap();
        std::fs::write(ctx.venv_path().join("stale"), "old").unwrap();

        let runner = ScriptedRunner::new();
        let python = test_python();
        let mut ui = MockUI::new();
        ui.set_confirm_response("recreate_env", true);

        let manager = EnvironmentManager::new(&ctx, &runner, &python);
        let action = manager.ensure(&mut ui).unwrap();

        assert_eq!(action, EnvAction::Recreated);
        // Old contents deleted before creation
        assert!(!ctx.venv_path().join("stale").exists());
        assert_eq!(runner.call_count("-m venv"), 1);
    }

    #[test]
    fn creation_failure_carries_tool_output() {
        let temp = TempDir::new().unwrap();
        let ctx = context_in(&temp);
        let runner = ScriptedRunner::new();
        runner.fail_with("-m venv", 1, "ensurepip is not available");

        let python = test_python();
        let mut ui = MockUI::new();

        let manager = EnvironmentManager::new(&ctx, &runner, &python);
        let err = manager.ensure(&mut ui).unwrap_err();

        match err {
            SetupError::VenvCreateFailed { output } => {
                assert!(output.contains("ensurepip is not available"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn interrupt_at_prompt_propagates_without_creating() {
        let temp = TempDir::new().unwrap();
        let ctx = context_in(&temp);
        std::fs::create_dir(ctx.venv_path()).unwrap();

        let runner = ScriptedRunner::new();
        let python = test_python();
        let mut ui = MockUI::new();
        ui.interrupt_on_confirm("recreate_env");

        let manager = EnvironmentManager::new(&ctx, &runner, &python);
        let err = manager.ensure(&mut ui).unwrap_err();

        assert!(matches!(err, SetupError::Interrupted));
        assert!(!runner.has_call("-m venv"));
    }
}
