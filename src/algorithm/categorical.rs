//! Long-format reshaping and counting for the categorical plot

use itertools::Itertools;
use serde::Serialize;

use crate::error::Result;
use crate::models::ExaminationTable;
use crate::schema::{self, INDICATOR_COLUMNS};

/// One (subject, indicator) pair in long format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongRecord {
    pub cardio: Option<i64>,
    pub variable: &'static str,
    pub value: Option<i64>,
}

/// Number of long-format records sharing (`cardio`, `variable`, `value`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub cardio: i64,
    pub variable: String,
    pub value: i64,
    pub total: usize,
}

/// Position of an indicator in the display order
fn indicator_rank(variable: &str) -> usize {
    INDICATOR_COLUMNS
        .iter()
        .position(|c| *c == variable)
        .unwrap_or(INDICATOR_COLUMNS.len())
}

/// Reshape the six indicator columns into long format keyed by `cardio`
///
/// Produces `6 × rows` records, row-major: the six indicators of the first
/// subject, then the second subject, and so on.
pub fn melt_indicators(table: &ExaminationTable) -> Result<Vec<LongRecord>> {
    let cardio = table.int_values(schema::CARDIO)?;
    let indicators = INDICATOR_COLUMNS
        .iter()
        .map(|name| table.int_values(name).map(|values| (*name, values)))
        .collect::<Result<Vec<_>>>()?;

    let mut records = Vec::with_capacity(cardio.len() * INDICATOR_COLUMNS.len());
    for (row, cardio) in cardio.iter().enumerate() {
        for (variable, values) in &indicators {
            records.push(LongRecord {
                cardio: *cardio,
                variable: *variable,
                value: values[row],
            });
        }
    }
    Ok(records)
}

/// Count long-format records per (`cardio`, `variable`, `value`)
///
/// Ordered by `cardio`, then indicator display order, then `value`. Records
/// with a missing `cardio` or `value` are not counted, and combinations that
/// never occur are absent.
#[must_use]
pub fn aggregate_counts(records: &[LongRecord]) -> Vec<CategoryCount> {
    records
        .iter()
        .filter_map(|r| Some((r.cardio?, r.variable, r.value?)))
        .sorted_by_key(|(cardio, variable, value)| (*cardio, indicator_rank(variable), *value))
        .chunk_by(|key| *key)
        .into_iter()
        .map(|((cardio, variable, value), group)| CategoryCount {
            cardio,
            variable: variable.to_string(),
            value,
            total: group.count(),
        })
        .collect()
}

/// Distinct `cardio` values, one plot panel each
#[must_use]
pub fn panel_values(counts: &[CategoryCount]) -> Vec<i64> {
    counts.iter().map(|c| c.cardio).sorted().dedup().collect()
}
