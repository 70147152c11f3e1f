//! Randomized sampler: N seeded draws of two dice.

use serde::Serialize;

use crate::error::DiceError;
use crate::frequency::SumFrequencyTable;
use crate::report::{Procedure, ReportSink, RunHeader};
use crate::rng::DeterministicRng;
use crate::roll::{DIE_FACES, Roll};

/// Roll count and seed for a sampling run. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunConfig {
    roll_count: u64,
    seed: i64,
}

impl RunConfig {
    /// Creates a configuration.
    #[must_use]
    pub fn new(roll_count: u64, seed: i64) -> Self {
        Self { roll_count, seed }
    }

    /// Number of rolls to draw.
    #[must_use]
    pub fn roll_count(&self) -> u64 {
        self.roll_count
    }

    /// Seed for the generator.
    #[must_use]
    pub fn seed(&self) -> i64 {
        self.seed
    }
}

/// Sampler lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplerPhase {
    /// No generator yet.
    Uninitialized,
    /// Seeded, draws remaining.
    Sampling,
    /// All draws made; the table is final.
    Reporting,
}

impl SamplerPhase {
    fn name(self) -> &'static str {
        match self {
            Self::Uninitialized => "Uninitialized",
            Self::Sampling => "Sampling",
            Self::Reporting => "Reporting",
        }
    }
}

/// Draws `roll_count` rolls from an owned generator and tallies their sums.
#[derive(Debug)]
pub struct Sampler<R> {
    config: RunConfig,
    phase: SamplerPhase,
    rng: Option<R>,
    drawn: u64,
    table: SumFrequencyTable,
}

impl<R: DeterministicRng> Sampler<R> {
    /// Creates an unseeded sampler with a zeroed table.
    #[must_use]
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            phase: SamplerPhase::Uninitialized,
            rng: None,
            drawn: 0,
            table: SumFrequencyTable::new(),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> SamplerPhase {
        self.phase
    }

    /// Draws still to be made.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.config.roll_count - self.drawn
    }

    /// Hands the sampler its generator. A zero roll count goes straight to
    /// `Reporting`.
    ///
    /// # Errors
    ///
    /// Returns `DiceError::InvalidPhase` if the sampler was already seeded.
    pub fn seed(&mut self, rng: R) -> Result<(), DiceError> {
        self.expect_phase(SamplerPhase::Uninitialized)?;
        self.rng = Some(rng);
        self.phase = if self.config.roll_count == 0 {
            SamplerPhase::Reporting
        } else {
            SamplerPhase::Sampling
        };
        Ok(())
    }

    /// Draws the next roll, die 1 before die 2, and records its sum.
    ///
    /// # Errors
    ///
    /// Returns `DiceError::InvalidPhase` unless the sampler is `Sampling`,
    /// or `DiceError::Validation` if the generator yields a face outside
    /// `[1, 6]`.
    pub fn draw(&mut self) -> Result<Roll, DiceError> {
        self.expect_phase(SamplerPhase::Sampling)?;
        let rng = self.rng.as_mut().ok_or(DiceError::InvalidPhase {
            expected: SamplerPhase::Sampling.name(),
            actual: SamplerPhase::Uninitialized.name(),
        })?;

        let die1 = rng.next_u32_range(1, u32::from(DIE_FACES));
        let die2 = rng.next_u32_range(1, u32::from(DIE_FACES));
        let roll = Roll::new(die1, die2)?;

        self.table.record(roll);
        self.drawn += 1;
        if self.drawn == self.config.roll_count {
            self.phase = SamplerPhase::Reporting;
        }
        Ok(roll)
    }

    /// The completed frequency table.
    ///
    /// # Errors
    ///
    /// Returns `DiceError::InvalidPhase` until every draw has been made.
    pub fn table(&self) -> Result<&SumFrequencyTable, DiceError> {
        self.expect_phase(SamplerPhase::Reporting)?;
        Ok(&self.table)
    }

    fn expect_phase(&self, expected: SamplerPhase) -> Result<(), DiceError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(DiceError::InvalidPhase {
                expected: expected.name(),
                actual: self.phase.name(),
            })
        }
    }
}

/// Runs a complete sampling pass: seeds `rng`, draws every roll into
/// `sink`, and reports the final table.
///
/// # Errors
///
/// Returns `DiceError` if the generator misbehaves or the sink fails.
pub fn run_sampler<R: DeterministicRng>(
    config: RunConfig,
    rng: R,
    sink: &mut dyn ReportSink,
) -> Result<SumFrequencyTable, DiceError> {
    let header = RunHeader::new(Procedure::Sampler, Some(config));
    let span = tracing::info_span!(
        "sampler",
        run_id = %header.run_id,
        roll_count = config.roll_count(),
        seed = config.seed()
    );
    let _guard = span.enter();

    let mut sampler = Sampler::new(config);
    sampler.seed(rng)?;
    tracing::info!("sampling started");

    sink.begin(&header)?;
    while sampler.phase() == SamplerPhase::Sampling {
        let roll = sampler.draw()?;
        tracing::debug!(die1 = roll.die1(), die2 = roll.die2(), sum = roll.sum(), "drew roll");
        sink.roll(roll)?;
    }

    let table = sampler.table()?;
    if table.total() == 0 {
        tracing::warn!("no rolls drawn; probabilities are undefined");
    }
    sink.finish(table)?;

    tracing::info!(total = table.total(), "sampling finished");
    Ok(table.clone())
}
