//! Post-install import verification.
//!
//! Each critical dependency is probed with a trivial `import` inside the
//! virtual environment. Failures are advisory: they downgrade the final
//! summary but never the exit code.

use tracing::debug;

use crate::context::ProjectContext;
use crate::error::{Result, SetupError};
use crate::shell::ToolRunner;
use crate::ui::UserInterface;

/// Critical modules probed after install, as (import name, display name).
pub const CRITICAL_IMPORTS: [(&str, &str); 6] = [
    ("cv2", "OpenCV"),
    ("deepface", "DeepFace"),
    ("tensorflow", "TensorFlow"),
    ("matplotlib", "Matplotlib"),
    ("PIL", "Pillow"),
    ("numpy", "NumPy"),
];

/// Result of one import probe.
#[derive(Debug, Clone)]
pub struct ImportCheck {
    /// Module identifier passed to the interpreter.
    pub module: &'static str,
    /// Human-readable package name.
    pub display: &'static str,
    /// Whether the probe exited zero.
    pub ok: bool,
}

/// Pass/fail record for every critical dependency, produced fresh each run.
#[derive(Debug, Clone, Default)]
pub struct VerificationRecord {
    /// One check per critical module, in probe order.
    pub checks: Vec<ImportCheck>,
}

impl VerificationRecord {
    /// Whether every probe passed.
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.ok)
    }

    /// Display names of the failed probes.
    pub fn failures(&self) -> Vec<&'static str> {
        self.checks
            .iter()
            .filter(|c| !c.ok)
            .map(|c| c.display)
            .collect()
    }
}

/// Probe each critical module inside the virtual environment.
///
/// Only an operator interrupt can abort verification; every other probe
/// error is recorded as a failed check.
pub fn verify(
    ctx: &ProjectContext,
    runner: &dyn ToolRunner,
    ui: &mut dyn UserInterface,
) -> Result<VerificationRecord> {
    let python = ctx.venv_python();
    let python_arg = python.display().to_string();

    ui.message("Verifying installation...");

    let mut record = VerificationRecord::default();
    for (module, display) in CRITICAL_IMPORTS {
        let probe = format!("import {}", module);
        let ok = match runner.run(&python_arg, &["-c", &probe], None) {
            Ok(output) => output.success,
            Err(SetupError::Interrupted) => return Err(SetupError::Interrupted),
            Err(e) => {
                debug!("probe for {} could not run: {}", module, e);
                false
            }
        };

        if ok {
            ui.success(&format!("{} import successful", display));
        } else {
            ui.error(&format!("{} import failed", display));
        }

        record.checks.push(ImportCheck {
            module,
            display,
            ok,
        });
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::ScriptedRunner;
    use crate::ui::MockUI;

    fn test_context() -> ProjectContext {
        ProjectContext::with_platform(std::path::PathBuf::from("/work/app"), false)
    }

    #[test]
    fn all_probes_pass_on_clean_install() {
        let ctx = test_context();
        let runner = ScriptedRunner::new();
        let mut ui = MockUI::new();

        let record = verify(&ctx, &runner, &mut ui).unwrap();

        assert_eq!(record.checks.len(), CRITICAL_IMPORTS.len());
        assert!(record.all_passed());
        assert!(record.failures().is_empty());
    }

    #[test]
    fn failed_probe_is_recorded_not_fatal() {
        let ctx = test_context();
        let runner = ScriptedRunner::new();
        runner.fail_with("import tensorflow", 1, "ModuleNotFoundError");
        let mut ui = MockUI::new();

        let record = verify(&ctx, &runner, &mut ui).unwrap();

        assert!(!record.all_passed());
        assert_eq!(record.failures(), vec!["TensorFlow"]);
        assert!(ui.has_error("TensorFlow import failed"));
        // Remaining probes still ran
        assert_eq!(record.checks.len(), CRITICAL_IMPORTS.len());
    }

    #[test]
    fn unlaunchable_probe_counts_as_failure() {
        let ctx = test_context();
        let runner = ScriptedRunner::new();
        runner.unavailable("import cv2");
        let mut ui = MockUI::new();

        let record = verify(&ctx, &runner, &mut ui).unwrap();

        assert_eq!(record.failures(), vec!["OpenCV"]);
    }

    #[test]
    fn interrupt_aborts_verification() {
        let ctx = test_context();
        let runner = ScriptedRunner::new();
        runner.interrupt_on("import deepface");
        let mut ui = MockUI::new();

        let err = verify(&ctx, &runner, &mut ui).unwrap_err();
        assert!(matches!(err, SetupError::Interrupted));
    }

    #[test]
    fn probes_run_inside_the_venv() {
        let ctx = test_context();
        let runner = ScriptedRunner::new();
        let mut ui = MockUI::new();

        verify(&ctx, &runner, &mut ui).unwrap();

        assert!(runner
            .calls()
            .iter()
            .all(|c| c.contains("emotion_env/bin/python")));
        assert_eq!(runner.call_count("-c import"), CRITICAL_IMPORTS.len());
    }
}
