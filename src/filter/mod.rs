//! Row filtering for record batches
//!
//! Filters are built as [`Expr`] trees, evaluated into a boolean mask with
//! Arrow compute kernels and applied with [`filter_record_batch`]. The source
//! batch is never modified; filtering always yields a new batch.

pub mod core;
pub mod expr;

pub use self::core::{BatchFilter, filter_record_batch};
pub use self::expr::{Expr, ExpressionFilter, evaluate_expr};
