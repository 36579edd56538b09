//! Dependency manifest handling.
//!
//! The manifest is a line-oriented `requirements.txt`: blank lines and `#`
//! comments are ignored, data lines are exactly `name==version`. When no
//! manifest exists, [`ensure`] writes the fixed default set verbatim. An
//! existing manifest is trusted as-is, never merged or validated.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;

/// Default manifest written when none exists.
pub const DEFAULT_MANIFEST: &str = "\
# Core deep learning and computer vision
deepface==0.0.79
opencv-python==4.8.1.78
tensorflow==2.13.0

# GUI framework
tkinter-dnd2==0.3.0

# Image processing and display
Pillow==10.0.1
numpy==1.24.3

# Data visualization
matplotlib==3.7.2

# Data handling
pandas==2.0.3

# System utilities
psutil==5.9.5

# Optional: Additional face detection backends (install if needed)
# mtcnn==0.1.1
# retina-face==0.0.13

# Development dependencies (optional)
# pytest==7.4.2
# flake8==6.0.0
";

/// One `name==version` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Package name.
    pub name: String,
    /// Exact pinned version.
    pub version: String,
}

impl Requirement {
    /// Parse a single data line of the form `name==version`.
    ///
    /// Returns `None` for blank lines, comments, and anything malformed.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let (name, version) = line.split_once("==")?;
        let (name, version) = (name.trim(), version.trim());
        if name.is_empty() || version.is_empty() || version.contains("==") {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            version: version.to_string(),
        })
    }
}

/// Parse every well-formed data line, in file order.
///
/// Existing manifests are trusted, so unparseable lines are skipped rather
/// than rejected.
pub fn parse(contents: &str) -> Vec<Requirement> {
    contents.lines().filter_map(Requirement::parse_line).collect()
}

/// Write the default manifest iff none exists at `path`.
///
/// Returns `true` when a manifest was created.
pub fn ensure(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    fs::write(path, DEFAULT_MANIFEST)?;
    info!("wrote default manifest to {}", path.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_data_line() {
        let req = Requirement::parse_line("numpy==1.24.3").unwrap();
        assert_eq!(req.name, "numpy");
        assert_eq!(req.version, "1.24.3");
    }

    #[test]
    fn skips_comments_and_blanks() {
        assert!(Requirement::parse_line("# a comment").is_none());
        assert!(Requirement::parse_line("   ").is_none());
        assert!(Requirement::parse_line("").is_none());
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(Requirement::parse_line("numpy").is_none());
        assert!(Requirement::parse_line("numpy==").is_none());
        assert!(Requirement::parse_line("==1.0").is_none());
        assert!(Requirement::parse_line("a==b==c").is_none());
    }

    #[test]
    fn default_manifest_has_data_lines_and_parses_cleanly() {
        let reqs = parse(DEFAULT_MANIFEST);
        assert!(!reqs.is_empty());

        // Every non-comment, non-blank line must be well-formed
        for line in DEFAULT_MANIFEST.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            assert!(
                Requirement::parse_line(line).is_some(),
                "malformed default line: {}",
                line
            );
        }
    }

    #[test]
    fn default_manifest_covers_critical_packages() {
        let reqs = parse(DEFAULT_MANIFEST);
        let names: Vec<&str> = reqs.iter().map(|r| r.name.as_str()).collect();

        for expected in ["deepface", "opencv-python", "tensorflow", "Pillow", "numpy"] {
            assert!(names.contains(&expected), "missing {}", expected);
        }
    }

    #[test]
    fn parse_preserves_file_order() {
        let reqs = parse("b==2\na==1\n");
        assert_eq!(reqs[0].name, "b");
        assert_eq!(reqs[1].name, "a");
    }

    #[test]
    fn ensure_creates_when_missing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("requirements.txt");

        assert!(ensure(&path).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_MANIFEST);
    }

    #[test]
    fn ensure_is_noop_when_present() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("requirements.txt");
        std::fs::write(&path, "somepkg==9.9.9\n").unwrap();

        assert!(!ensure(&path).unwrap());
        // Existing content trusted as-is, not merged
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "somepkg==9.9.9\n"
        );
    }

    #[test]
    fn ensure_is_noop_even_for_garbage_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("requirements.txt");
        std::fs::write(&path, "not a requirement at all").unwrap();

        assert!(!ensure(&path).unwrap());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "not a requirement at all"
        );
    }
}
