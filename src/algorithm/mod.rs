//! Data transformations behind the two figures
//!
//! * [`features`] derives `overweight` and normalizes cholesterol/glucose
//! * [`categorical`] reshapes indicators to long format and counts them
//! * [`cleaning`] selects plausible rows for the heatmap
//! * [`statistics`] provides quantiles and correlations

pub mod categorical;
pub mod cleaning;
pub mod features;
pub mod statistics;

pub use categorical::{CategoryCount, LongRecord, aggregate_counts, melt_indicators, panel_values};
pub use cleaning::{CleanedSubset, CleaningBounds, PercentileBand, clean_for_heatmap};
pub use features::{BMI_THRESHOLD, body_mass_index, derive_features, is_overweight, normalize_level};
pub use statistics::{
    CorrelationMatrix, correlation_matrix, pearson_correlation, quantile, upper_triangle_mask,
};
