//! Filter expressions over numeric columns

use arrow::array::{BooleanArray, Float64Array};
use arrow::compute::and;
use arrow::compute::kernels::cmp::{gt_eq, lt_eq};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;

use crate::error::Result;
use crate::filter::core::{BatchFilter, filter_record_batch};
use crate::utils::{downcast_array, get_column};

/// Represents a filter expression over numeric columns
///
/// Comparisons are made on values cast to `f64`. A null on either side of
/// a comparison yields a null mask entry, which drops the row.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Column is greater than or equal to a literal
    GtEq(String, f64),

    /// Column is less than or equal to a literal
    LtEq(String, f64),

    /// First column is less than or equal to the second, row by row
    ColumnLtEq(String, String),

    /// Logical AND of expressions
    And(Vec<Expr>),
}

/// Evaluates a filter expression against a record batch
///
/// # Returns
/// A boolean array indicating which rows match the filter
pub fn evaluate_expr(batch: &RecordBatch, expr: &Expr) -> Result<BooleanArray> {
    match expr {
        Expr::GtEq(col_name, value) => {
            let column = float_column(batch, col_name)?;
            Ok(gt_eq(&column, &Float64Array::new_scalar(*value))?)
        }

        Expr::LtEq(col_name, value) => {
            let column = float_column(batch, col_name)?;
            Ok(lt_eq(&column, &Float64Array::new_scalar(*value))?)
        }

        Expr::ColumnLtEq(left, right) => {
            let left = float_column(batch, left)?;
            let right = float_column(batch, right)?;
            Ok(lt_eq(&left, &right)?)
        }

        Expr::And(exprs) => evaluate_and_expression(batch, exprs),
    }
}

/// Evaluates a logical AND expression
fn evaluate_and_expression(batch: &RecordBatch, exprs: &[Expr]) -> Result<BooleanArray> {
    let Some((first, rest)) = exprs.split_first() else {
        return Ok(BooleanArray::from(vec![true; batch.num_rows()]));
    };

    let mut result = evaluate_expr(batch, first)?;
    for expr in rest {
        let mask = evaluate_expr(batch, expr)?;
        result = and(&result, &mask)?;
    }
    Ok(result)
}

fn float_column(batch: &RecordBatch, col_name: &str) -> Result<Float64Array> {
    let column = get_column(batch, col_name, &DataType::Float64)?;
    let floats = downcast_array::<Float64Array>(&column, col_name)?;
    Ok(floats.clone())
}

/// A filter that evaluates an expression against a record batch
#[derive(Debug, Clone)]
pub struct ExpressionFilter {
    expr: Expr,
}

impl ExpressionFilter {
    #[must_use]
    pub fn new(expr: Expr) -> Self {
        Self { expr }
    }
}

impl BatchFilter for ExpressionFilter {
    fn filter(&self, batch: &RecordBatch) -> Result<RecordBatch> {
        let mask = evaluate_expr(batch, &self.expr)?;
        filter_record_batch(batch, &mask)
    }
}
