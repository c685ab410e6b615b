//! Examination file loading
//!
//! CSV files go through the Arrow CSV reader with an inferred schema; files
//! with a `.parquet` extension go through the Parquet record-batch reader.
//! Either way the batches are concatenated into one table.

use std::io::{Read, Seek};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use arrow::compute::concat_batches;
use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::util::safe_open_file;
use crate::error::{Result, VisualizerError};
use crate::models::ExaminationTable;
use crate::utils::{log_operation_complete, log_operation_start};

/// Rows per batch while reading
pub const DEFAULT_BATCH_SIZE: usize = 16384;

/// Load an examination file into a validated table
///
/// The file type is picked from the extension: `.parquet` is read as
/// Parquet, anything else as comma-delimited text with a header row.
pub fn load_examinations(path: &Path) -> Result<ExaminationTable> {
    log_operation_start("Loading examinations from", path);
    let start = Instant::now();

    let is_parquet = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("parquet"));
    let batch = if is_parquet {
        read_parquet(path)?
    } else {
        read_csv(path)?
    };

    let table = ExaminationTable::try_new(batch)?;
    log_operation_complete("loaded", path, table.num_rows(), Some(start.elapsed()));
    Ok(table)
}

/// Read a comma-delimited file with a header row into one record batch
pub fn read_csv(path: &Path) -> Result<RecordBatch> {
    let file = safe_open_file(path, "reading examination CSV")?;
    read_csv_from(file).map_err(|e| match e {
        VisualizerError::Io { context, source, .. } => {
            VisualizerError::io(context, Some(path), source)
        }
        other => other,
    })
}

/// Read CSV data from any seekable source
///
/// The source is read twice: once to infer the schema and once for the data.
pub fn read_csv_from<R: Read + Seek>(mut source: R) -> Result<RecordBatch> {
    let format = Format::default().with_header(true).with_delimiter(b',');
    let (schema, records) = format.infer_schema(&mut source, None)?;
    log::debug!("Inferred {} CSV columns from {records} records", schema.fields().len());

    source
        .rewind()
        .map_err(|e| VisualizerError::io("Failed to rewind CSV source", None, e))?;

    let schema = Arc::new(schema);
    let reader = ReaderBuilder::new(Arc::clone(&schema))
        .with_format(format)
        .with_batch_size(DEFAULT_BATCH_SIZE)
        .build(source)?;

    let batches = reader.collect::<std::result::Result<Vec<_>, ArrowError>>()?;
    Ok(concat_batches(&schema, &batches)?)
}

/// Read a Parquet file into one record batch
pub fn read_parquet(path: &Path) -> Result<RecordBatch> {
    let file = safe_open_file(path, "reading examination parquet")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let schema = Arc::clone(builder.schema());
    let reader = builder.with_batch_size(DEFAULT_BATCH_SIZE).build()?;

    let batches = reader.collect::<std::result::Result<Vec<_>, ArrowError>>()?;
    Ok(concat_batches(&schema, &batches)?)
}
