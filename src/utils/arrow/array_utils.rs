//! Utilities for working with Arrow arrays.
//!
//! Column lookups that either return the array in the expected type or fail
//! with a [`VisualizerError`] naming the column.

use arrow::array::{Array, ArrayRef, Float64Array};
use arrow::compute::kernels::cast::cast;
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use log::debug;

use crate::error::{Result, VisualizerError};

/// Get the column index by name from a record batch
pub fn get_column_index(batch: &RecordBatch, column_name: &str) -> Result<usize> {
    batch
        .schema()
        .index_of(column_name)
        .map_err(|_| VisualizerError::column_not_found(column_name))
}

/// Get a column from a record batch, cast to `expected_type` when needed
///
/// # Returns
///
/// * `Ok(ArrayRef)` - The column array (converted if necessary)
/// * `Err(VisualizerError)` - If the column is missing or the cast fails
pub fn get_column(
    batch: &RecordBatch,
    column_name: &str,
    expected_type: &DataType,
) -> Result<ArrayRef> {
    let idx = get_column_index(batch, column_name)?;
    let column = batch.column(idx);
    let actual_type = column.data_type();

    if actual_type == expected_type {
        return Ok(column.clone());
    }

    debug!("Converting column '{column_name}' from {actual_type:?} to {expected_type:?}");
    cast(column, expected_type).map_err(|e| {
        VisualizerError::InvalidData(format!(
            "column '{column_name}' cannot be read as {expected_type:?}: {e}"
        ))
    })
}

/// Downcast a column to a specific array type with clear error messages
pub fn downcast_array<'a, A: Array + 'static>(
    array: &'a ArrayRef,
    column_name: &str,
) -> Result<&'a A> {
    array.as_any().downcast_ref::<A>().ok_or_else(|| {
        VisualizerError::InvalidData(format!(
            "column '{column_name}' has unexpected type {:?}",
            array.data_type()
        ))
    })
}

/// Read a numeric column as `f64` values, nulls preserved as `None`
pub fn float_values(batch: &RecordBatch, column_name: &str) -> Result<Vec<Option<f64>>> {
    let column = get_column(batch, column_name, &DataType::Float64)?;
    let floats = downcast_array::<Float64Array>(&column, column_name)?;
    Ok(floats.iter().collect())
}
