//! `dice-sample`: tabulate N seeded random rolls of two six-sided dice.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use dicestats_cli::args::{OutputFormat, SampleArgs};
use dicestats_cli::commands;
use dicestats_cli::config::{Prompter, resolve_run_config};
use dicestats_cli::error::AppError;
use dicestats_cli::telemetry;
use dicestats_core::rng::SeededRng;

fn main() -> ExitCode {
    let args = SampleArgs::parse();
    telemetry::init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = %err, "dice-sample failed");
            eprintln!("error: {err}");
            err.exit_code()
        }
    }
}

fn run(args: SampleArgs) -> Result<(), AppError> {
    let format = args.format();

    // Prompts must not interleave with a JSON document on stdout.
    let prompt_out: Box<dyn Write> = match format {
        OutputFormat::Text => Box::new(io::stdout()),
        OutputFormat::Json => Box::new(io::stderr()),
    };
    let mut prompter = Prompter::new(io::stdin().lock(), prompt_out);
    let config = resolve_run_config(args.rolls, args.seed, &mut prompter)?;
    drop(prompter);

    let rng = SeededRng::from_seed(config.seed());
    commands::sample(config, rng, format, io::stdout().lock())?;
    Ok(())
}
