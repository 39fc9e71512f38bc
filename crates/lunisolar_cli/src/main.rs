mod cli;
mod commands;
mod config;
mod logging;
mod render;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::{Cli, Command};

fn main() -> ExitCode {
    let Cli { verbose, command } = Cli::parse();
    logging::init(verbose);

    let outcome = match command {
        Command::Convert(args) => commands::convert(args),
        Command::Batch(args) => commands::batch(args),
        Command::Months(args) => commands::months(args),
    };
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("lunisolar: {e:#}");
            ExitCode::FAILURE
        }
    }
}
