//! Error handling for the visualizer.

pub mod util;

use std::io;
use std::path::{Path, PathBuf};

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Specialized error type for loading, deriving and rendering
#[derive(Debug, thiserror::Error)]
pub enum VisualizerError {
    /// Error opening, reading or writing a file
    #[error("IO error: {context}{}", path_suffix(.path))]
    Io {
        /// What was being attempted
        context: String,
        /// File involved, when known
        path: Option<PathBuf>,
        /// Underlying IO failure
        #[source]
        source: io::Error,
    },

    /// Error processing Arrow data
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error processing Parquet data
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// A required column is missing from the table
    #[error("Column '{column}' not found")]
    ColumnNotFound {
        /// Name of the missing column
        column: String,
    },

    /// Column present but holding data the operation cannot use
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Failure inside the drawing backend
    #[error("Plot error: {0}")]
    Plot(String),
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" (path: {})", p.display()))
        .unwrap_or_default()
}

impl VisualizerError {
    /// Create an IO error with context and an optional path
    pub fn io(context: impl Into<String>, path: Option<&Path>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            path: path.map(Path::to_path_buf),
            source,
        }
    }

    /// Create a missing-column error
    pub fn column_not_found(column: impl Into<String>) -> Self {
        Self::ColumnNotFound {
            column: column.into(),
        }
    }

    /// Wrap any drawing backend error
    pub fn plot<E: std::fmt::Display>(error: E) -> Self {
        Self::Plot(error.to_string())
    }
}

impl From<io::Error> for VisualizerError {
    fn from(error: io::Error) -> Self {
        Self::io("unspecified IO failure", None, error)
    }
}

/// Result type for visualizer operations
pub type Result<T> = std::result::Result<T, VisualizerError>;
