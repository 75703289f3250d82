//! metabind CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use metabind::cli::{Cli, CommandContext, CommandDispatcher};
use metabind::config;
use metabind::ui::{TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag or `dev_mode: true` in the settings sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so command output stays parseable.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("metabind=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("metabind=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let vault_root = cli
        .vault
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    // Settings errors surface when a command loads them; here they only
    // decide the log level.
    let dev_mode = config::load(&vault_root, cli.settings.as_deref())
        .map(|s| s.dev_mode)
        .unwrap_or(false);
    init_tracing(cli.debug || dev_mode);

    tracing::debug!("metabind starting with args: {:?}", cli);

    let mut ui = TerminalUI::new();
    let dispatcher = CommandDispatcher::new(CommandContext::new(vault_root, cli.settings.clone()));

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
