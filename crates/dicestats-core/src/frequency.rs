//! Sum frequency table: an 11-bucket histogram of two-dice sums.

use serde::Serialize;

use crate::roll::{MAX_SUM, MIN_SUM, Roll};

/// Number of distinct sums two dice can produce.
pub const SUM_BUCKETS: usize = (MAX_SUM - MIN_SUM + 1) as usize;

/// Per-sum counters, where bucket `i` holds the count for sum `i + 2`.
///
/// Counters only ever grow, and their total always equals the number of
/// rolls recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SumFrequencyTable {
    counts: [u64; SUM_BUCKETS],
}

/// One line of the summary table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryRow {
    /// The dice sum, 2 through 12.
    pub sum: u8,
    /// How many rolls produced this sum.
    pub frequency: u64,
    /// `frequency / total`, or `None` when no rolls were recorded.
    pub probability: Option<f64>,
}

impl SumFrequencyTable {
    /// Creates a zeroed table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one roll against its sum.
    pub fn record(&mut self, roll: Roll) {
        self.counts[usize::from(roll.sum() - MIN_SUM)] += 1;
    }

    /// Count for a given sum; sums outside `[2, 12]` have a count of zero.
    #[must_use]
    pub fn frequency(&self, sum: u8) -> u64 {
        sum.checked_sub(MIN_SUM)
            .and_then(|index| self.counts.get(usize::from(index)))
            .copied()
            .unwrap_or(0)
    }

    /// Raw counters indexed by `sum - 2`.
    #[must_use]
    pub fn counts(&self) -> &[u64; SUM_BUCKETS] {
        &self.counts
    }

    /// Total number of rolls recorded.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Fraction of all recorded rolls that produced `sum`.
    ///
    /// Returns `None` when the table is empty, since the quotient is
    /// undefined.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn probability(&self, sum: u8) -> Option<f64> {
        match self.total() {
            0 => None,
            total => Some(self.frequency(sum) as f64 / total as f64),
        }
    }

    /// Summary rows for sums 2 through 12, in ascending order.
    #[must_use]
    pub fn summary(&self) -> Vec<SummaryRow> {
        (MIN_SUM..=MAX_SUM)
            .map(|sum| SummaryRow {
                sum,
                frequency: self.frequency(sum),
                probability: self.probability(sum),
            })
            .collect()
    }
}
