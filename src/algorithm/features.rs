//! Feature derivation
//!
//! Adds the `overweight` flag and rewrites `cholesterol`/`gluc` from the
//! 1–3 scale to a normal (0) / above normal (1) indicator.

use std::sync::Arc;

use arrow::array::{ArrayRef, Int64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use log::{debug, info};

use crate::error::{Result, VisualizerError};
use crate::models::ExaminationTable;
use crate::schema;
use crate::utils::get_column_index;

/// BMI above which a subject counts as overweight
pub const BMI_THRESHOLD: f64 = 25.0;

/// Body-mass index from height in centimetres and weight in kilograms
#[must_use]
pub fn body_mass_index(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Strictly above the threshold; a BMI of exactly 25 is not overweight
#[must_use]
pub fn is_overweight(height_cm: f64, weight_kg: f64) -> bool {
    body_mass_index(height_cm, weight_kg) > BMI_THRESHOLD
}

/// Map a 1–3 level to 0 (normal) or 1 (above normal)
///
/// Anything other than exactly 1, including a missing value, is above normal.
#[must_use]
pub fn normalize_level(level: Option<i64>) -> i64 {
    i64::from(level != Some(1))
}

/// Derive `overweight` and normalize `cholesterol`/`gluc` on the table
///
/// Row count and row order are unchanged. `overweight` is appended as the
/// last column; the normalized columns keep their position. Deriving twice
/// is rejected since the rewrite of the level columns is not idempotent.
pub fn derive_features(table: ExaminationTable) -> Result<ExaminationTable> {
    if table.has_derived_features() {
        return Err(VisualizerError::InvalidData(
            "features have already been derived for this table".to_string(),
        ));
    }

    let heights = table.float_values(schema::HEIGHT)?;
    let weights = table.float_values(schema::WEIGHT)?;
    let overweight: Int64Array = heights
        .iter()
        .zip(&weights)
        .map(|(height, weight)| match (height, weight) {
            (Some(h), Some(w)) => Some(i64::from(is_overweight(*h, *w))),
            // BMI of a missing measurement is NaN, which never exceeds the threshold
            _ => Some(0),
        })
        .collect();

    let cholesterol = normalized_column(&table, schema::CHOLESTEROL)?;
    let gluc = normalized_column(&table, schema::GLUC)?;

    let batch = table.into_batch();
    let cholesterol_idx = get_column_index(&batch, schema::CHOLESTEROL)?;
    let gluc_idx = get_column_index(&batch, schema::GLUC)?;

    let source_schema = batch.schema();
    let mut fields: Vec<Field> = source_schema
        .fields()
        .iter()
        .map(|f| f.as_ref().clone())
        .collect();
    let mut columns: Vec<ArrayRef> = batch.columns().to_vec();

    columns[cholesterol_idx] = cholesterol;
    fields[cholesterol_idx] = Field::new(schema::CHOLESTEROL, DataType::Int64, true);
    columns[gluc_idx] = gluc;
    fields[gluc_idx] = Field::new(schema::GLUC, DataType::Int64, true);

    let overweight_count = overweight.iter().flatten().filter(|v| *v == 1).count();
    fields.push(Field::new(schema::OVERWEIGHT, DataType::Int64, false));
    columns.push(Arc::new(overweight));

    let derived = RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)?;
    info!(
        "Derived features for {} rows ({} overweight)",
        derived.num_rows(),
        overweight_count
    );
    debug!("Derived table columns: {:?}", derived.schema().fields().iter().map(|f| f.name()).collect::<Vec<_>>());

    Ok(ExaminationTable::from_batch_unchecked(derived))
}

fn normalized_column(table: &ExaminationTable, column_name: &str) -> Result<ArrayRef> {
    let normalized: Int64Array = table
        .int_values(column_name)?
        .into_iter()
        .map(|level| Some(normalize_level(level)))
        .collect();
    Ok(Arc::new(normalized))
}
