//! Operator-facing progress and result reporting.
//!
//! Pure presentation: nothing here makes decisions, it only renders what the
//! orchestrator hands it.

use crate::context::ProjectContext;
use crate::provision::ProvisionSummary;
use crate::python::PythonInterpreter;
use crate::shell::ToolOutput;
use crate::ui::UserInterface;

/// Application title shown in the banner.
pub const TITLE: &str = "Emotion Recognition System Setup";

/// Print the opening banner.
pub fn print_banner(ui: &mut dyn UserInterface) {
    ui.show_header(TITLE);
}

/// Print the host facts line block under the banner.
pub fn print_host_facts(ui: &mut dyn UserInterface, ctx: &ProjectContext, python: &PythonInterpreter) {
    ui.message(&format!("Project directory: {}", ctx.root().display()));
    ui.message(&format!("Python version:    {}", python.display_version));
    ui.message(&format!(
        "Operating system:  {}",
        if ctx.is_windows() { "Windows" } else { std::env::consts::OS }
    ));
}

/// Echo captured tool output, verbose mode only.
pub fn echo_tool_output(ui: &mut dyn UserInterface, output: &ToolOutput) {
    if !ui.output_mode().shows_tool_output() {
        return;
    }

    let combined = output.combined();
    if !combined.trim().is_empty() {
        ui.message(combined.trim_end());
    }
}

/// Print the final status and next-steps instructions.
pub fn print_next_steps(ui: &mut dyn UserInterface, ctx: &ProjectContext, summary: &ProvisionSummary) {
    if summary.is_clean() {
        ui.show_header("Setup completed successfully!");
    } else {
        ui.warning("Setup completed with some issues");
        for advisory in &summary.advisories {
            ui.warning(&format!("  - {}", advisory));
        }
        ui.message("Check the messages above; the affected packages may need a manual install.");
    }

    ui.message("Next steps:");
    ui.message(&format!(
        "  1. Activate the virtual environment:\n     {}",
        ctx.activation_hint()
    ));
    ui.message(&format!(
        "  2. Add face images to the {} folder:\n     - Use clear, well-lit photos\n     - Name them like: john_doe.jpg, jane_smith.png\n     - One face per image",
        crate::context::IMAGE_DIR
    ));
    ui.message("  3. Run the application:\n     python emotion_recognition_system.py");
    ui.message("  4. In the application, click 'Start Camera' to begin and 'Refresh Database' after adding new images");

    ui.message("Troubleshooting:");
    ui.message("  - If the camera doesn't work, check permissions");
    ui.message("  - If recognition is poor, add more or better photos");
    ui.message("  - See README.md and DOCUMENTATION.md for details");
}
