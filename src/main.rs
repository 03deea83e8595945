//! Bookcase - personal library catalog
//!
//! Resolves settings, opens the catalog and hands it to the chosen command.

use anyhow::{Context, Result};
use bookcase::{
    cli::commands::{handler_for, CommandResult},
    cli::{Cli, Commands},
    config::{LogLevel, Settings},
    Catalog,
};
use clap::Parser;
use std::io::Write;
use tracing_subscriber::EnvFilter;

/// Initialize tracing at the given level. Logs go to stderr so that
/// listings and the menu own stdout.
fn initialize_tracing(log_level: LogLevel) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level.to_filter_directive()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::discover(cli.config.as_deref()).context("Failed to load settings")?;
    initialize_tracing(settings.resolve_log_level(cli.log_level));

    let working_dir = std::env::current_dir().context("Failed to read current directory")?;
    let store = settings.resolve_store(cli.store.as_deref(), &working_dir);

    let command = cli.command.unwrap_or(Commands::Menu);
    tracing::debug!(
        command = command.name(),
        modifies_store = command.modifies_store(),
        store = %store.display(),
        "Running command"
    );

    let mut catalog = Catalog::open(&store);
    let handler = handler_for(command);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = handler
        .execute(&mut catalog, &mut out)
        .with_context(|| format!("The {} command failed", handler.name()))?;

    match &result {
        CommandResult::Success(message) => {
            if let Some(message) = message {
                writeln!(out, "{}", message)?;
            }
        }
        CommandResult::Warning(message) | CommandResult::Error(message) => {
            eprintln!("{}", message)
        }
    }
    out.flush()?;

    if result.exit_code() != 0 {
        std::process::exit(result.exit_code());
    }
    Ok(())
}
