//! Project paths and host-platform facts.
//!
//! [`ProjectContext`] is built once at startup and passed immutably to every
//! component. It owns the conventional names the downstream application
//! expects: the virtual environment directory, the dependency manifest, and
//! the face-image library.

use std::path::{Path, PathBuf};

/// Directory name of the isolated Python environment.
pub const VENV_NAME: &str = "emotion_env";

/// File name of the dependency manifest at the project root.
pub const MANIFEST_FILE: &str = "requirements.txt";

/// Directory name of the face-image library at the project root.
pub const IMAGE_DIR: &str = "local_images";

/// Immutable record of project paths and host-OS flavor.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    root: PathBuf,
    venv_path: PathBuf,
    is_windows: bool,
}

impl ProjectContext {
    /// Create a context rooted at `root`, detecting the host platform.
    pub fn new(root: PathBuf) -> Self {
        Self::with_platform(root, cfg!(target_os = "windows"))
    }

    /// Create a context with an explicit platform flag (for testing).
    pub fn with_platform(root: PathBuf, is_windows: bool) -> Self {
        let venv_path = root.join(VENV_NAME);
        Self {
            root,
            venv_path,
            is_windows,
        }
    }

    /// Project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of the virtual environment.
    pub fn venv_path(&self) -> &Path {
        &self.venv_path
    }

    /// Whether the host is Windows.
    pub fn is_windows(&self) -> bool {
        self.is_windows
    }

    /// Path to the Python executable inside the virtual environment.
    pub fn venv_python(&self) -> PathBuf {
        if self.is_windows {
            self.venv_path.join("Scripts").join("python.exe")
        } else {
            self.venv_path.join("bin").join("python")
        }
    }

    /// Path to the dependency manifest.
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    /// Path to the face-image library directory.
    pub fn image_dir(&self) -> PathBuf {
        self.root.join(IMAGE_DIR)
    }

    /// Shell command the operator runs to activate the environment.
    pub fn activation_hint(&self) -> String {
        if self.is_windows {
            format!("{}\\Scripts\\activate", VENV_NAME)
        } else {
            format!("source {}/bin/activate", VENV_NAME)
        }
    }
}
