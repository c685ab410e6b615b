//! Logging utilities
//!
//! Consistent start/finish messages for the load and render stages.

pub mod log;

pub use self::log::{log_operation_complete, log_operation_start, log_warning};
