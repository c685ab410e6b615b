//! Utility functions for error handling
//!
//! Filesystem helpers that attach the path and the purpose of the access
//! to every failure.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Result, VisualizerError};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(VisualizerError::io(
            format!("File not found, needed for: {purpose}"),
            Some(path),
            io::Error::from(io::ErrorKind::NotFound),
        ));
    }

    if !path.is_file() {
        return Err(VisualizerError::io(
            format!("Path is not a file, expected a file for: {purpose}"),
            Some(path),
            io::Error::from(io::ErrorKind::InvalidInput),
        ));
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            _ => format!("Failed to open file for: {purpose}"),
        };
        VisualizerError::io(context, Some(path), e)
    })
}

/// Make sure a directory exists, creating it (and parents) when missing
pub fn ensure_directory(path: &Path, purpose: &str) -> Result<()> {
    if path.as_os_str().is_empty() || path.is_dir() {
        return Ok(());
    }

    if path.exists() {
        return Err(VisualizerError::io(
            format!("Path is not a directory, expected a directory for: {purpose}"),
            Some(path),
            io::Error::from(io::ErrorKind::InvalidInput),
        ));
    }

    fs::create_dir_all(path).map_err(|e| {
        VisualizerError::io(format!("Failed to create directory for: {purpose}"), Some(path), e)
    })
}
