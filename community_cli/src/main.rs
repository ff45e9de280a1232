mod cli;
mod commands;
mod errors;

use std::process::ExitCode;

use clap::Parser;
use log::error;

use cli::{CommunityCli, CommunityCliCommand};
use errors::CliError;

fn main() -> ExitCode {
    let cli = CommunityCli::parse();
    initialize_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            e.exit_code()
        }
    }
}

fn run(cli: CommunityCli) -> Result<(), CliError> {
    match cli.command.clone().unwrap_or_default() {
        CommunityCliCommand::Serve => commands::serve(cli.config()?),
        CommunityCliCommand::Tools => {
            commands::list_tools();
            Ok(())
        }
    }
}

/// Logs always go to stderr: stdout carries the MCP protocol.
fn initialize_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .target(env_logger::Target::Stderr)
        .init();
}
