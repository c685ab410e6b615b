//! Arrow data handling utilities
//!
//! Helpers for pulling typed columns out of record batches, casting them to
//! the type an operation expects.

pub mod array_utils;

pub use array_utils::{downcast_array, float_values, get_column, get_column_index};
