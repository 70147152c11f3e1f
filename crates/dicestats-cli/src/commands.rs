//! Command entry points shared by the binaries and the tests.

use std::io::Write;

use dicestats_core::enumerator::run_enumerator;
use dicestats_core::error::DiceError;
use dicestats_core::frequency::SumFrequencyTable;
use dicestats_core::report::{JsonReport, ReportSink, TextReport};
use dicestats_core::rng::DeterministicRng;
use dicestats_core::sampler::{RunConfig, run_sampler};

use crate::args::OutputFormat;
use crate::error::AppError;

/// Runs the enumerator, writing the report to `out`.
///
/// # Errors
///
/// Returns `AppError::Domain` if writing the report fails.
pub fn enumerate<W: Write>(format: OutputFormat, out: W) -> Result<SumFrequencyTable, AppError> {
    with_sink(format, out, run_enumerator)
}

/// Runs the sampler with an already-built generator, writing the report to
/// `out`.
///
/// # Errors
///
/// Returns `AppError::Domain` if sampling or writing the report fails.
pub fn sample<R, W>(
    config: RunConfig,
    rng: R,
    format: OutputFormat,
    out: W,
) -> Result<SumFrequencyTable, AppError>
where
    R: DeterministicRng,
    W: Write,
{
    with_sink(format, out, |sink| run_sampler(config, rng, sink))
}

fn with_sink<W, F>(format: OutputFormat, out: W, run: F) -> Result<SumFrequencyTable, AppError>
where
    W: Write,
    F: FnOnce(&mut dyn ReportSink) -> Result<SumFrequencyTable, DiceError>,
{
    let table = match format {
        OutputFormat::Text => run(&mut TextReport::new(out))?,
        OutputFormat::Json => run(&mut JsonReport::new(out))?,
    };
    Ok(table)
}
