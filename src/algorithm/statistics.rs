//! Descriptive statistics for the heatmap stage
//!
//! Quantiles for the percentile band filter and Pearson correlations for
//! the heatmap matrix.

use arrow::record_batch::RecordBatch;
use rayon::prelude::*;
use serde::Serialize;

use crate::error::Result;
use crate::schema::is_numeric;
use crate::utils::float_values;

/// Quantile with linear interpolation between order statistics
///
/// Missing and NaN values are skipped. Returns NaN when nothing is left.
#[must_use]
pub fn quantile(values: &[Option<f64>], q: f64) -> f64 {
    let mut sorted: Vec<f64> = values
        .iter()
        .flatten()
        .copied()
        .filter(|v| !v.is_nan())
        .collect();
    if sorted.is_empty() {
        return f64::NAN;
    }
    sorted.sort_by(f64::total_cmp);

    let q = q.clamp(0.0, 1.0);
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

/// Pearson correlation of two equally long samples
///
/// `None` for fewer than two observations or zero variance.
#[must_use]
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() < 2 || x.len() != y.len() {
        return None;
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let (mut num, mut denom_x, mut denom_y) = (0.0, 0.0, 0.0);
    for (&xx, &yy) in x.iter().zip(y) {
        let dx = xx - mean_x;
        let dy = yy - mean_y;
        num += dx * dy;
        denom_x += dx * dx;
        denom_y += dy * dy;
    }

    let denom = denom_x.sqrt() * denom_y.sqrt();
    if denom == 0.0 {
        return None;
    }

    Some((num / denom).clamp(-1.0, 1.0))
}

/// Square matrix of pairwise correlations between named columns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    /// Row-major, `values[i][j]` correlates `columns[i]` with `columns[j]`
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row][col]
    }

    /// Correlation between two columns by name
    #[must_use]
    pub fn between(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        Some(self.values[i][j])
    }

    /// Symmetric within `tolerance`, NaN cells only mirrored by NaN
    #[must_use]
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        (0..self.len()).all(|i| {
            (0..self.len()).all(|j| {
                let (a, b) = (self.values[i][j], self.values[j][i]);
                (a.is_nan() && b.is_nan()) || (a - b).abs() <= tolerance
            })
        })
    }
}

/// Mask hiding the diagonal and everything above it
///
/// `mask[i][j]` is `true` when `j >= i`.
#[must_use]
pub fn upper_triangle_mask(n: usize) -> Vec<Vec<bool>> {
    (0..n).map(|i| (0..n).map(|j| j >= i).collect()).collect()
}

/// Pearson correlations between every numeric column of a batch
///
/// Each pair uses the rows where both values are present. The diagonal is
/// exactly 1.0 for columns with variance and NaN otherwise.
pub fn correlation_matrix(batch: &RecordBatch) -> Result<CorrelationMatrix> {
    let schema = batch.schema();
    let columns: Vec<String> = schema
        .fields()
        .iter()
        .filter(|f| is_numeric(f.data_type()))
        .map(|f| f.name().clone())
        .collect();

    let data = columns
        .iter()
        .map(|name| float_values(batch, name))
        .collect::<Result<Vec<_>>>()?;

    let values: Vec<Vec<f64>> = (0..columns.len())
        .into_par_iter()
        .map(|i| {
            (0..columns.len())
                .map(|j| pairwise_correlation(&data[i], &data[j], i == j))
                .collect()
        })
        .collect();

    Ok(CorrelationMatrix { columns, values })
}

fn pairwise_correlation(a: &[Option<f64>], b: &[Option<f64>], diagonal: bool) -> f64 {
    let (x, y): (Vec<f64>, Vec<f64>) = a
        .iter()
        .zip(b)
        .filter_map(|pair| match pair {
            (Some(x), Some(y)) if !x.is_nan() && !y.is_nan() => Some((*x, *y)),
            _ => None,
        })
        .unzip();

    match pearson_correlation(&x, &y) {
        Some(_) if diagonal => 1.0,
        Some(r) => r,
        None => f64::NAN,
    }
}
