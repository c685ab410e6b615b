//! Derives cardiovascular risk features from medical examination data and
//! renders a categorical bar chart and a correlation heatmap.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod plot;
pub mod schema;
pub mod utils;

// Re-export the most common types for easier use
pub use config::VisualizerConfig;
pub use error::{Result, VisualizerError};
pub use models::ExaminationTable;

// Stages
pub use algorithm::{
    CategoryCount, CorrelationMatrix, aggregate_counts, correlation_matrix, derive_features,
    melt_indicators, upper_triangle_mask,
};
pub use loader::load_examinations;
pub use pipeline::{PipelineReport, draw_cat_plot, draw_heat_map, prepare_table, render_figures, run};
pub use plot::{CategoricalFigure, HeatmapFigure};

// Arrow types
pub use arrow::record_batch::RecordBatch;
