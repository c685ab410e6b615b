//! The in-memory examination table
//!
//! Wraps a single [`RecordBatch`] holding every raw examination column in its
//! expected Arrow type. Extra columns are carried along untouched and keep
//! their position.

use std::sync::Arc;

use arrow::array::{ArrayRef, Int64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;

use crate::error::{Result, VisualizerError};
use crate::schema::{self, examination_schema};
use crate::utils::{downcast_array, float_values, get_column, get_column_index};

/// Examination records, one row per subject
#[derive(Debug, Clone)]
pub struct ExaminationTable {
    batch: RecordBatch,
}

impl ExaminationTable {
    /// Validate a loaded batch and cast raw columns to their expected types
    ///
    /// Fails with [`crate::VisualizerError::ColumnNotFound`] on the first raw
    /// column that is missing. Measurements are widened to `f64` as parsed;
    /// a code column holding fractional values is rejected rather than
    /// truncated.
    pub fn try_new(batch: RecordBatch) -> Result<Self> {
        let expected = examination_schema();
        for field in expected.fields() {
            get_column_index(&batch, field.name())?;
        }

        let source_schema = batch.schema();
        let mut fields: Vec<Field> = Vec::with_capacity(source_schema.fields().len());
        let mut columns: Vec<ArrayRef> = Vec::with_capacity(batch.num_columns());

        for (idx, field) in source_schema.fields().iter().enumerate() {
            match expected.field_with_name(field.name()) {
                Ok(target) if target.data_type() != field.data_type() => {
                    if target.data_type() == &DataType::Int64 {
                        ensure_integral(&batch, field.name())?;
                    }
                    columns.push(get_column(&batch, field.name(), target.data_type())?);
                    fields.push(Field::new(field.name(), target.data_type().clone(), true));
                }
                _ => {
                    columns.push(batch.column(idx).clone());
                    fields.push(field.as_ref().clone());
                }
            }
        }

        let batch = RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)?;
        Ok(Self { batch })
    }

    pub(crate) fn from_batch_unchecked(batch: RecordBatch) -> Self {
        Self { batch }
    }

    /// The underlying record batch
    #[must_use]
    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    #[must_use]
    pub fn into_batch(self) -> RecordBatch {
        self.batch
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    /// Column names in table order
    #[must_use]
    pub fn column_names(&self) -> Vec<String> {
        self.batch
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect()
    }

    /// Whether `overweight` has been added already
    #[must_use]
    pub fn has_derived_features(&self) -> bool {
        self.batch.schema().index_of(schema::OVERWEIGHT).is_ok()
    }

    /// Integer values of a column, nulls as `None`
    pub fn int_values(&self, column_name: &str) -> Result<Vec<Option<i64>>> {
        let column = get_column(&self.batch, column_name, &DataType::Int64)?;
        let ints = downcast_array::<Int64Array>(&column, column_name)?;
        Ok(ints.iter().collect())
    }

    /// Values of a numeric column as `f64`, nulls as `None`
    pub fn float_values(&self, column_name: &str) -> Result<Vec<Option<f64>>> {
        float_values(&self.batch, column_name)
    }
}

/// Reject a code column whose values would lose a fractional part as `i64`
fn ensure_integral(batch: &RecordBatch, column_name: &str) -> Result<()> {
    let fractional = float_values(batch, column_name)?
        .into_iter()
        .flatten()
        .find(|v| v.fract() != 0.0);
    match fractional {
        Some(value) => Err(VisualizerError::InvalidData(format!(
            "column '{column_name}' holds codes but contains the non-integral value {value}"
        ))),
        None => Ok(()),
    }
}
