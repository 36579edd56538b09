//! Face-image library scaffolding.
//!
//! The downstream application expects a `local_images/` directory at the
//! project root. On first run it is created with an instructions file; an
//! existing directory is left alone entirely, instructions included.

use std::fs;

use tracing::info;

use crate::context::ProjectContext;
use crate::error::Result;
use crate::ui::UserInterface;

/// Usage note written into a freshly created image directory.
pub const INSTRUCTIONS: &str = "\
HOW TO ADD PEOPLE TO RECOGNIZE:

1. Place clear face photos in this folder
2. Name files like: john_doe.jpg, jane_smith.png, alex_johnson.jpeg
3. Use underscores for spaces in names
4. Supported formats: .jpg, .jpeg, .png, .bmp
5. One face per image works best
6. Good lighting and frontal face preferred

Examples:
- john_doe.jpg
- mary_johnson.png
- alex_smith.jpeg

After adding images, click 'Refresh Database' in the app.
";

/// File name of the usage note inside the image directory.
pub const INSTRUCTIONS_FILE: &str = "INSTRUCTIONS.txt";

/// Create the image directory and usage note iff absent.
pub fn ensure_image_library(ctx: &ProjectContext, ui: &mut dyn UserInterface) -> Result<()> {
    let dir = ctx.image_dir();

    if dir.exists() {
        ui.success(&format!("Directory already exists: {}", dir.display()));
        return Ok(());
    }

    fs::create_dir_all(&dir)?;
    fs::write(dir.join(INSTRUCTIONS_FILE), INSTRUCTIONS)?;
    info!("scaffolded image library at {}", dir.display());

    ui.success(&format!("Created directory: {}", dir.display()));
    ui.success("Created setup instructions");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn context_in(temp: &TempDir) -> ProjectContext {
        ProjectContext::with_platform(temp.path().to_path_buf(), false)
    }

    #[test]
    fn creates_directory_and_instructions() {
        let temp = TempDir::new().unwrap();
        let ctx = context_in(&temp);
        let mut ui = MockUI::new();

        ensure_image_library(&ctx, &mut ui).unwrap();

        let note = std::fs::read_to_string(ctx.image_dir().join(INSTRUCTIONS_FILE)).unwrap();
        assert!(note.contains("HOW TO ADD PEOPLE TO RECOGNIZE"));
        assert!(note.contains(".jpg"));
        assert!(ui.has_success("Created directory"));
    }

    #[test]
    fn existing_directory_is_untouched() {
        let temp = TempDir::new().unwrap();
        let ctx = context_in(&temp);
        std::fs::create_dir(ctx.image_dir()).unwrap();
        std::fs::write(ctx.image_dir().join(INSTRUCTIONS_FILE), "operator edits").unwrap();

        let mut ui = MockUI::new();
        ensure_image_library(&ctx, &mut ui).unwrap();

        // No overwrite of the operator's edited instructions
        assert_eq!(
            std::fs::read_to_string(ctx.image_dir().join(INSTRUCTIONS_FILE)).unwrap(),
            "operator edits"
        );
        assert!(ui.has_success("already exists"));
    }

    #[test]
    fn rerun_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let ctx = context_in(&temp);
        let mut ui = MockUI::new();

        ensure_image_library(&ctx, &mut ui).unwrap();
        ensure_image_library(&ctx, &mut ui).unwrap();

        assert!(ctx.image_dir().join(INSTRUCTIONS_FILE).exists());
    }
}
