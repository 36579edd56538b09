//! CLI argument definitions.
//!
//! Basecamp is a single no-subcommand binary; all provisioning conventions
//! (environment name, manifest path, image directory) are fixed, so the
//! flags only shape output and interactivity.

use clap::Parser;
use std::path::PathBuf;

/// Basecamp - one-command runtime provisioning for the emotion recognition app.
#[derive(Debug, Parser)]
#[command(name = "basecamp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Suppress everything except errors
    #[arg(long, global = true)]
    pub silent: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Resolve prompts to their defaults instead of asking
    #[arg(long, global = true)]
    pub non_interactive: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_no_args() {
        let cli = Cli::parse_from(["basecamp"]);
        assert!(cli.project.is_none());
        assert!(!cli.verbose);
        assert!(!cli.non_interactive);
    }

    #[test]
    fn parses_project_flag() {
        let cli = Cli::parse_from(["basecamp", "--project", "/tmp/app"]);
        assert_eq!(cli.project, Some(PathBuf::from("/tmp/app")));
    }

    #[test]
    fn parses_output_flags() {
        let cli = Cli::parse_from(["basecamp", "--quiet", "--no-color", "--debug"]);
        assert!(cli.quiet);
        assert!(cli.no_color);
        assert!(cli.debug);
    }

    #[test]
    fn parses_silent() {
        let cli = Cli::parse_from(["basecamp", "--silent"]);
        assert!(cli.silent);
        assert!(!cli.quiet);
    }

    #[test]
    fn parses_non_interactive() {
        let cli = Cli::parse_from(["basecamp", "--non-interactive"]);
        assert!(cli.non_interactive);
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["basecamp", "--bogus"]).is_err());
    }
}
