//! Basecamp CLI entry point.

use std::process::ExitCode;

use basecamp::cli::Cli;
use basecamp::context::ProjectContext;
use basecamp::interrupt;
use basecamp::provision::Provisioner;
use basecamp::shell::SystemRunner;
use basecamp::ui::{create_ui, OutputMode};
use basecamp::SetupError;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit code for an operator interrupt, matching shell convention for SIGINT.
const EXIT_INTERRUPTED: u8 = 130;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("basecamp=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("basecamp=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Basecamp starting with args: {:?}", cli);

    // Catch Ctrl-C on a flag so an interrupt during a long external step
    // still gets the distinct interrupted exit instead of the raw signal.
    let interrupted = interrupt::install_handler();

    // Determine output mode
    let output_mode = if cli.silent {
        OutputMode::Silent
    } else if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Determine project root
    let project_root = cli
        .project
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let mut ui = create_ui(!cli.non_interactive, output_mode);

    let ctx = ProjectContext::new(project_root);
    let runner = SystemRunner::with_interrupt(interrupted);
    let provisioner = Provisioner::new(ctx, &runner);

    match provisioner.run(ui.as_mut()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(SetupError::Interrupted) => {
            ui.warning("Setup interrupted by operator");
            ExitCode::from(EXIT_INTERRUPTED)
        }
        Err(e) => {
            ui.error(&format!("Setup failed: {}", e));
            ExitCode::from(1)
        }
    }
}
