//! `dice-enumerate`: tabulate all 36 outcomes of two six-sided dice.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use dicestats_cli::args::EnumerateArgs;
use dicestats_cli::commands;
use dicestats_cli::error::AppError;
use dicestats_cli::telemetry;

fn main() -> ExitCode {
    let args = EnumerateArgs::parse();
    telemetry::init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = %err, "dice-enumerate failed");
            eprintln!("error: {err}");
            err.exit_code()
        }
    }
}

fn run(args: &EnumerateArgs) -> Result<(), AppError> {
    commands::enumerate(args.format(), io::stdout().lock())?;
    Ok(())
}
