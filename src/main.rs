use clap::Parser;
use std::process::ExitCode;
use uve::cli::Cli;
use uve::{commands, exit_code_for, ui};

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing. stdout is reserved for activation scripts.
    let default_filter = if cli.verbose { "uve=debug" } else { "uve=warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match commands::execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error(format!("{err:#}"));
            ExitCode::from(exit_code_for(&err))
        }
    }
}
