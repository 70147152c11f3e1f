//! Report sinks: where a tabulation run sends its rolls and summary.
//!
//! A procedure calls `begin` once, `roll` for every throw in order, and
//! `finish` once with the completed table. `TextReport` streams the
//! tab-separated console tables as the run progresses; `JsonReport`
//! buffers everything and writes a single document at the end.

use std::io::Write;

use serde::Serialize;
use uuid::Uuid;

use crate::error::DiceError;
use crate::frequency::{SumFrequencyTable, SummaryRow};
use crate::roll::Roll;
use crate::sampler::RunConfig;

/// Which procedure produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Procedure {
    /// Exhaustive walk over all 36 outcomes.
    Enumerator,
    /// Seeded random draws.
    Sampler,
}

impl Procedure {
    /// Column header printed above the roll table.
    #[must_use]
    pub fn roll_header(self) -> &'static str {
        match self {
            Self::Enumerator => "Die1\tDie2\tSum",
            Self::Sampler => "Die 1\tDie 2\tSum",
        }
    }
}

/// Identity and configuration of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunHeader {
    /// Correlation id shared by the run's log lines and its report.
    pub run_id: Uuid,
    /// The procedure being run.
    pub procedure: Procedure,
    /// Sampler configuration; absent for the enumerator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<RunConfig>,
}

impl RunHeader {
    /// Creates a header with a fresh run id.
    #[must_use]
    pub fn new(procedure: Procedure, config: Option<RunConfig>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            procedure,
            config,
        }
    }
}

/// Receives the output of a tabulation run.
pub trait ReportSink {
    /// Called once before the first roll.
    ///
    /// # Errors
    ///
    /// Returns `DiceError` if the sink cannot write.
    fn begin(&mut self, header: &RunHeader) -> Result<(), DiceError>;

    /// Called for every roll, in the order the rolls were made.
    ///
    /// # Errors
    ///
    /// Returns `DiceError` if the sink cannot write.
    fn roll(&mut self, roll: Roll) -> Result<(), DiceError>;

    /// Called once after the last roll with the completed table.
    ///
    /// # Errors
    ///
    /// Returns `DiceError` if the sink cannot write.
    fn finish(&mut self, table: &SumFrequencyTable) -> Result<(), DiceError>;
}

/// Formats a probability the way the summary table prints it.
///
/// The quotient is shown at full precision in its shortest round-trip
/// form, never in exponent notation; whole values keep a trailing `.0`.
/// An undefined probability prints as `n/a`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_probability(probability: Option<f64>) -> String {
    match probability {
        None => "n/a".to_owned(),
        Some(p) if p.fract() == 0.0 => format!("{p:.1}"),
        Some(p) => p.to_string(),
    }
}

/// Streams tab-separated console tables to a writer.
#[derive(Debug)]
pub struct TextReport<W> {
    out: W,
}

impl<W: Write> TextReport<W> {
    /// Wraps a writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for TextReport<W> {
    fn begin(&mut self, header: &RunHeader) -> Result<(), DiceError> {
        if let Some(config) = header.config {
            writeln!(
                self.out,
                "Rolling two dice {} times with a seed of {}.",
                config.roll_count(),
                config.seed()
            )?;
        }
        writeln!(self.out, "{}", header.procedure.roll_header())?;
        Ok(())
    }

    fn roll(&mut self, roll: Roll) -> Result<(), DiceError> {
        writeln!(self.out, "{}\t{}\t{}", roll.die1(), roll.die2(), roll.sum())?;
        Ok(())
    }

    fn finish(&mut self, table: &SumFrequencyTable) -> Result<(), DiceError> {
        writeln!(self.out, "\nSum\tFreq\tProb")?;
        for row in table.summary() {
            writeln!(
                self.out,
                "{}\t{}\t{}",
                row.sum,
                row.frequency,
                format_probability(row.probability)
            )?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// One roll as it appears in a JSON report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RollRecord {
    /// The first die.
    pub die1: u8,
    /// The second die.
    pub die2: u8,
    /// Their sum.
    pub sum: u8,
}

impl From<Roll> for RollRecord {
    fn from(roll: Roll) -> Self {
        Self {
            die1: roll.die1(),
            die2: roll.die2(),
            sum: roll.sum(),
        }
    }
}

/// A complete run, as written by `JsonReport`.
#[derive(Debug, Clone, Serialize)]
pub struct TabulationReport {
    /// Run identity and configuration.
    #[serde(flatten)]
    pub header: RunHeader,
    /// Every roll, in order.
    pub rolls: Vec<RollRecord>,
    /// Number of rolls tabulated.
    pub total: u64,
    /// Sum, frequency and probability for sums 2 through 12.
    pub summary: Vec<SummaryRow>,
}

/// Buffers a run and writes it as one pretty-printed JSON document.
#[derive(Debug)]
pub struct JsonReport<W> {
    out: W,
    header: Option<RunHeader>,
    rolls: Vec<RollRecord>,
}

impl<W: Write> JsonReport<W> {
    /// Wraps a writer.
    pub fn new(out: W) -> Self {
        Self {
            out,
            header: None,
            rolls: Vec::new(),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for JsonReport<W> {
    fn begin(&mut self, header: &RunHeader) -> Result<(), DiceError> {
        self.header = Some(*header);
        self.rolls.clear();
        Ok(())
    }

    fn roll(&mut self, roll: Roll) -> Result<(), DiceError> {
        self.rolls.push(roll.into());
        Ok(())
    }

    fn finish(&mut self, table: &SumFrequencyTable) -> Result<(), DiceError> {
        let header = self.header.take().ok_or_else(|| {
            DiceError::Validation("report finished before it was begun".to_owned())
        })?;
        let report = TabulationReport {
            header,
            rolls: std::mem::take(&mut self.rolls),
            total: table.total(),
            summary: table.summary(),
        };
        serde_json::to_writer_pretty(&mut self.out, &report)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roll(die1: u32, die2: u32) -> Roll {
        Roll::new(die1, die2).unwrap()
    }

    fn render_text(header: &RunHeader, rolls: &[Roll]) -> String {
        let mut table = SumFrequencyTable::new();
        let mut sink = TextReport::new(Vec::new());
        sink.begin(header).unwrap();
        for r in rolls {
            table.record(*r);
            sink.roll(*r).unwrap();
        }
        sink.finish(&table).unwrap();
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn test_format_probability_full_precision() {
        assert_eq!(format_probability(Some(6.0 / 36.0)), "0.16666666666666666");
        assert_eq!(format_probability(Some(1.0 / 36.0)), "0.027777777777777776");
    }

    #[test]
    fn test_format_probability_whole_values_keep_decimal() {
        assert_eq!(format_probability(Some(0.0)), "0.0");
        assert_eq!(format_probability(Some(1.0)), "1.0");
    }

    #[test]
    fn test_format_probability_small_values_stay_positional() {
        assert_eq!(format_probability(Some(1.0 / 100_000.0)), "0.00001");
        assert_eq!(format_probability(Some(3.0 / 1_000_000.0)), "0.000003");
    }

    #[test]
    fn test_format_probability_undefined_is_na() {
        assert_eq!(format_probability(None), "n/a");
    }

    #[test]
    fn test_text_report_enumerator_layout() {
        let header = RunHeader::new(Procedure::Enumerator, None);

        let text = render_text(&header, &[roll(1, 1), roll(3, 4)]);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Die1\tDie2\tSum");
        assert_eq!(lines[1], "1\t1\t2");
        assert_eq!(lines[2], "3\t4\t7");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "Sum\tFreq\tProb");
        assert_eq!(lines[5], "2\t1\t0.5");
        assert_eq!(lines[6], "3\t0\t0.0");
        assert_eq!(lines[10], "7\t1\t0.5");
        assert_eq!(lines.len(), 5 + 11);
    }

    #[test]
    fn test_text_report_sampler_prints_confirmation() {
        let header = RunHeader::new(Procedure::Sampler, Some(RunConfig::new(1, -3)));

        let text = render_text(&header, &[roll(6, 5)]);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Rolling two dice 1 times with a seed of -3.");
        assert_eq!(lines[1], "Die 1\tDie 2\tSum");
        assert_eq!(lines[2], "6\t5\t11");
    }

    #[test]
    fn test_text_report_empty_run_prints_na() {
        let header = RunHeader::new(Procedure::Sampler, Some(RunConfig::new(0, 9)));

        let text = render_text(&header, &[]);

        let summary: Vec<&str> = text.lines().skip(4).collect();
        assert_eq!(summary.len(), 11);
        assert!(summary.iter().all(|line| line.ends_with("\t0\tn/a")));
    }

    #[test]
    fn test_json_report_contains_rolls_and_summary() {
        let header = RunHeader::new(Procedure::Sampler, Some(RunConfig::new(2, 42)));
        let mut table = SumFrequencyTable::new();
        let mut sink = JsonReport::new(Vec::new());

        sink.begin(&header).unwrap();
        for r in [roll(2, 2), roll(1, 3)] {
            table.record(r);
            sink.roll(r).unwrap();
        }
        sink.finish(&table).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&sink.into_inner()).unwrap();
        assert_eq!(json["run_id"], header.run_id.to_string());
        assert_eq!(json["procedure"], "sampler");
        assert_eq!(json["config"]["roll_count"], 2);
        assert_eq!(json["config"]["seed"], 42);
        assert_eq!(json["rolls"][1], serde_json::json!({ "die1": 1, "die2": 3, "sum": 4 }));
        assert_eq!(json["total"], 2);
        assert_eq!(json["summary"][2]["sum"], 4);
        assert_eq!(json["summary"][2]["frequency"], 2);
        assert_eq!(json["summary"][2]["probability"], 1.0);
    }

    #[test]
    fn test_json_report_enumerator_omits_config() {
        let header = RunHeader::new(Procedure::Enumerator, None);
        let mut sink = JsonReport::new(Vec::new());

        sink.begin(&header).unwrap();
        sink.finish(&SumFrequencyTable::new()).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&sink.into_inner()).unwrap();
        assert!(json.get("config").is_none());
        assert_eq!(json["procedure"], "enumerator");
        assert!(json["summary"][0]["probability"].is_null());
    }

    #[test]
    fn test_json_report_finish_without_begin_fails() {
        let mut sink = JsonReport::new(Vec::new());

        let result = sink.finish(&SumFrequencyTable::new());

        assert!(matches!(result, Err(DiceError::Validation(_))));
    }
}
