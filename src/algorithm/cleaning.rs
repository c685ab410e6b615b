//! Plausibility filtering ahead of the correlation heatmap
//!
//! Keeps rows where diastolic pressure does not exceed systolic pressure and
//! where height and weight both lie inside a percentile band of the full
//! table. Bounds are computed once and applied as fixed thresholds.

use arrow::record_batch::RecordBatch;
use log::{debug, info};
use serde::Serialize;

use crate::algorithm::statistics::quantile;
use crate::error::Result;
use crate::filter::{BatchFilter, Expr, ExpressionFilter};
use crate::models::ExaminationTable;
use crate::schema;
use crate::utils::log_warning;

/// Inclusive value range retained by a band filter
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentileBand {
    pub lower: f64,
    pub upper: f64,
}

impl PercentileBand {
    /// Band between two quantiles of a column's non-missing values
    #[must_use]
    pub fn from_values(values: &[Option<f64>], lower_q: f64, upper_q: f64) -> Self {
        Self {
            lower: quantile(values, lower_q),
            upper: quantile(values, upper_q),
        }
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Height and weight bands used by one cleaning pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CleaningBounds {
    pub height: PercentileBand,
    pub weight: PercentileBand,
}

impl CleaningBounds {
    /// Compute both bands over the whole table
    pub fn from_table(table: &ExaminationTable, lower_q: f64, upper_q: f64) -> Result<Self> {
        let height = table.float_values(schema::HEIGHT)?;
        let weight = table.float_values(schema::WEIGHT)?;
        Ok(Self {
            height: PercentileBand::from_values(&height, lower_q, upper_q),
            weight: PercentileBand::from_values(&weight, lower_q, upper_q),
        })
    }

    /// All row conditions, combined with a logical AND
    #[must_use]
    pub fn to_expr(&self) -> Expr {
        Expr::And(vec![
            Expr::ColumnLtEq(schema::AP_LO.to_string(), schema::AP_HI.to_string()),
            Expr::GtEq(schema::HEIGHT.to_string(), self.height.lower),
            Expr::LtEq(schema::HEIGHT.to_string(), self.height.upper),
            Expr::GtEq(schema::WEIGHT.to_string(), self.weight.lower),
            Expr::LtEq(schema::WEIGHT.to_string(), self.weight.upper),
        ])
    }
}

/// Rows retained for the heatmap together with the bounds that selected them
#[derive(Debug, Clone)]
pub struct CleanedSubset {
    pub batch: RecordBatch,
    pub bounds: CleaningBounds,
}

/// Apply the plausibility filter, leaving the table untouched
pub fn clean_for_heatmap(
    table: &ExaminationTable,
    lower_q: f64,
    upper_q: f64,
) -> Result<CleanedSubset> {
    let bounds = CleaningBounds::from_table(table, lower_q, upper_q)?;
    debug!(
        "Height band [{}, {}], weight band [{}, {}]",
        bounds.height.lower, bounds.height.upper, bounds.weight.lower, bounds.weight.upper
    );

    let batch = ExpressionFilter::new(bounds.to_expr()).filter(table.batch())?;
    info!(
        "Kept {} of {} rows for the correlation heatmap",
        batch.num_rows(),
        table.num_rows()
    );
    if batch.num_rows() == 0 {
        log_warning("No rows left after plausibility filtering", None);
    }

    Ok(CleanedSubset { batch, bounds })
}
