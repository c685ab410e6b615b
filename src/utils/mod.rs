//! Shared helpers for Arrow columns and operation logging

pub mod arrow;
pub mod logging;

pub use self::arrow::{downcast_array, float_values, get_column, get_column_index};
pub use self::logging::{log_operation_complete, log_operation_start, log_warning};
