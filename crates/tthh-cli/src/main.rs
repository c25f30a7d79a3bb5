use clap::{Parser, Subcommand};
use dotenv::dotenv;
use log::error;
use std::process::ExitCode;
use tthh_core::InputConfig;

mod components;
mod exceptions;
mod models;

use components::{filter::FilterArgs, form::FormArgs, parse::ParseArgs};
use exceptions::CliError;

/// Flexible DD/MM/YY date entry: an absence request form and the parsing
/// rules behind it
#[derive(Parser, Debug)]
#[command(name = "tthh", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the absence request form
    Form(FormArgs),
    /// Parse date text and print the resulting date
    Parse(ParseArgs),
    /// Print the text a date field shows for some raw input
    Filter(FilterArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    let cli = Cli::parse();

    // the form captures logs itself; stdout belongs to the terminal UI
    if !matches!(cli.command, Command::Form(_)) {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> Result<(), CliError> {
    let config = InputConfig::from_env()?;
    match command {
        Command::Form(args) => args.run(config).await,
        Command::Parse(args) => {
            println!("{}", args.run(config)?);
            Ok(())
        }
        Command::Filter(args) => {
            println!("{}", args.run());
            Ok(())
        }
    }
}
