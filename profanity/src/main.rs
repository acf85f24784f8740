// profanity/src/main.rs
//! `profanity` entry point.
//!
//! Parses the command line, sets up logging and dispatches to the command
//! implementations. Exits with code 2 when `filter --fail-on-match` finds profanity.

use anyhow::Result;
use clap::Parser;
use std::io;
use std::process::ExitCode;

use profanity::cli::{Cli, Commands};
use profanity::commands::{self, filter, lists, live};
use profanity::logger;

async fn dispatch(cli: &Cli) -> Result<ExitCode> {
    match &cli.command {
        Commands::Filter(cmd) => {
            let found = filter::run_filter_command(cmd, cli.quiet).await?;
            if found && cmd.fail_on_match {
                return Ok(ExitCode::from(2));
            }
        }
        Commands::Live(cmd) => live::run_live_command(cmd).await?,
        Commands::Strategies { json } => lists::run_strategies(&mut io::stdout().lock(), *json)?,
        Commands::Targets { json } => lists::run_targets(&mut io::stdout().lock(), *json)?,
        Commands::Lists(cmd) => lists::run_lists(cmd, &mut io::stdout().lock()).await?,
    }
    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug, cli.disable_debug));

    match dispatch(&cli).await {
        Ok(code) => code,
        Err(e) => {
            commands::error_msg(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
