//! Sampler configuration: roll count and seed.
//!
//! Values already supplied on the command line or through the environment
//! (see `args::SampleArgs`) are used as given; anything missing is asked
//! for interactively. The roll count is resolved and validated before the
//! seed is asked for.

use std::io::{BufRead, Write};

use dicestats_core::sampler::RunConfig;

use crate::error::AppError;

/// Prompt for the roll count.
pub const ROLLS_PROMPT: &str = "How many rolls of two dice would you like to simulate? ";

/// Prompt for the seed.
pub const SEED_PROMPT: &str = "What pseudo-random number generator seed would you like to use? ";

const ROLL_COUNT: &str = "roll count";
const SEED: &str = "seed";

/// Asks questions on one stream and reads answers, one line each, from
/// another.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `question` and returns the next line of input, without its
    /// line ending.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Input` naming `input_name` if input is exhausted,
    /// or `AppError::Io` if either stream fails.
    pub fn ask(&mut self, question: &str, input_name: &'static str) -> Result<String, AppError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::Input {
                input: input_name,
                reason: "no value provided".to_owned(),
            });
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }

    /// Returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parses a roll count: a non-negative integer.
///
/// # Errors
///
/// Returns `AppError::Input` if `raw` is not an integer or is negative.
pub fn parse_roll_count(raw: &str) -> Result<u64, AppError> {
    let trimmed = raw.trim();
    if let Ok(count) = trimmed.parse::<u64>() {
        return Ok(count);
    }
    let reason = match trimmed.parse::<i128>() {
        Ok(n) if n < 0 => format!("must not be negative, got {n}"),
        Ok(n) => format!("{n} is too large"),
        Err(_) => format!("'{trimmed}' is not an integer"),
    };
    Err(AppError::Input {
        input: ROLL_COUNT,
        reason,
    })
}

/// Parses a seed: any integer that fits in an `i64`.
///
/// # Errors
///
/// Returns `AppError::Input` if `raw` is not such an integer.
pub fn parse_seed(raw: &str) -> Result<i64, AppError> {
    let trimmed = raw.trim();
    trimmed.parse::<i64>().map_err(|e| AppError::Input {
        input: SEED,
        reason: format!("'{trimmed}' is not a 64-bit integer ({e})"),
    })
}

/// Resolves the sampler's roll count and seed, prompting for whichever
/// of `rolls` and `seed` is `None`.
///
/// # Errors
///
/// Returns `AppError::Input` for a missing or malformed value, naming
/// which one failed.
pub fn resolve_run_config<R, W>(
    rolls: Option<String>,
    seed: Option<String>,
    prompter: &mut Prompter<R, W>,
) -> Result<RunConfig, AppError>
where
    R: BufRead,
    W: Write,
{
    let rolls_raw = supplied_or_prompt(rolls, ROLLS_PROMPT, ROLL_COUNT, prompter)?;
    let roll_count = parse_roll_count(&rolls_raw)?;

    let seed_raw = supplied_or_prompt(seed, SEED_PROMPT, SEED, prompter)?;
    let seed = parse_seed(&seed_raw)?;

    Ok(RunConfig::new(roll_count, seed))
}

fn supplied_or_prompt<R, W>(
    supplied: Option<String>,
    question: &str,
    input_name: &'static str,
    prompter: &mut Prompter<R, W>,
) -> Result<String, AppError>
where
    R: BufRead,
    W: Write,
{
    match supplied {
        Some(value) => {
            tracing::debug!(input = input_name, "supplied without prompting");
            Ok(value)
        }
        None => prompter.ask(question, input_name),
    }
}
