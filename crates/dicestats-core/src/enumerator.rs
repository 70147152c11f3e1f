//! Exhaustive enumerator over all 36 ordered outcomes of two dice.

use crate::error::DiceError;
use crate::frequency::SumFrequencyTable;
use crate::report::{Procedure, ReportSink, RunHeader};
use crate::roll::{DIE_FACES, Roll};

/// Every ordered outcome, die 1 outermost: (1,1), (1,2), ..., (6,6).
pub fn outcomes() -> impl Iterator<Item = Roll> {
    (1..=DIE_FACES)
        .flat_map(|die1| (1..=DIE_FACES).map(move |die2| Roll::from_faces(die1, die2)))
}

/// Walks every outcome into `sink` and reports the resulting table.
///
/// # Errors
///
/// Returns `DiceError` only if the sink fails.
pub fn run_enumerator(sink: &mut dyn ReportSink) -> Result<SumFrequencyTable, DiceError> {
    let header = RunHeader::new(Procedure::Enumerator, None);
    let span = tracing::info_span!("enumerator", run_id = %header.run_id);
    let _guard = span.enter();
    tracing::info!("enumeration started");

    let mut table = SumFrequencyTable::new();
    sink.begin(&header)?;
    for roll in outcomes() {
        table.record(roll);
        sink.roll(roll)?;
    }
    sink.finish(&table)?;

    tracing::info!(total = table.total(), "enumeration finished");
    Ok(table)
}
