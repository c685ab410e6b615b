//! The three-stage run: load and derive, then the two figures
//!
//! Both figures read the derived table without modifying it. They are drawn
//! one after the other (categorical first) unless parallel rendering is
//! switched on in the configuration.

use std::path::Path;
use std::time::Instant;

use log::{debug, info};
use serde::Serialize;

use crate::algorithm::categorical::{aggregate_counts, melt_indicators};
use crate::algorithm::cleaning::clean_for_heatmap;
use crate::algorithm::features::derive_features;
use crate::algorithm::statistics::{correlation_matrix, upper_triangle_mask};
use crate::config::VisualizerConfig;
use crate::error::util::ensure_directory;
use crate::error::{Result, VisualizerError};
use crate::loader::load_examinations;
use crate::models::ExaminationTable;
use crate::plot::{CategoricalFigure, HeatmapFigure, render_catplot, render_heatmap};
use crate::utils::{log_operation_complete, log_operation_start};

/// Outcome of a full run
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    /// Rows in the derived table
    pub rows: usize,
    pub categorical: CategoricalFigure,
    pub heatmap: HeatmapFigure,
}

fn require_features(table: &ExaminationTable) -> Result<()> {
    if table.has_derived_features() {
        Ok(())
    } else {
        Err(VisualizerError::InvalidData(
            "features must be derived before plotting".to_string(),
        ))
    }
}

/// Load an examination file and derive the feature columns
pub fn prepare_table(path: &Path) -> Result<ExaminationTable> {
    derive_features(load_examinations(path)?)
}

/// Draw the categorical bar chart and write it to `catplot.png`
pub fn draw_cat_plot(table: &ExaminationTable, config: &VisualizerConfig) -> Result<CategoricalFigure> {
    require_features(table)?;
    let path = config.catplot_path();
    log_operation_start("Drawing categorical plot to", &path);
    let start = Instant::now();

    let long = melt_indicators(table)?;
    let counts = aggregate_counts(&long);
    debug!(
        "Aggregated {} long-format rows into {} counts: {}",
        long.len(),
        counts.len(),
        serde_json::to_string(&counts).unwrap_or_default()
    );

    ensure_directory(&config.output_dir, "writing the categorical plot")?;
    let panels = render_catplot(&counts, &path, config.catplot_size)?;
    log_operation_complete("plotted", &path, table.num_rows(), Some(start.elapsed()));

    Ok(CategoricalFigure {
        counts,
        panels,
        path,
    })
}

/// Draw the correlation heatmap and write it to `heatmap.png`
pub fn draw_heat_map(table: &ExaminationTable, config: &VisualizerConfig) -> Result<HeatmapFigure> {
    require_features(table)?;
    let path = config.heatmap_path();
    log_operation_start("Drawing correlation heatmap to", &path);
    let start = Instant::now();

    let subset = clean_for_heatmap(table, config.lower_quantile, config.upper_quantile)?;
    let matrix = correlation_matrix(&subset.batch)?;
    let mask = upper_triangle_mask(matrix.len());

    ensure_directory(&config.output_dir, "writing the heatmap")?;
    render_heatmap(&matrix, &mask, &path, config.heatmap_size)?;
    log_operation_complete("plotted", &path, subset.batch.num_rows(), Some(start.elapsed()));

    Ok(HeatmapFigure {
        matrix,
        mask,
        rows: subset.batch.num_rows(),
        bounds: subset.bounds,
        path,
    })
}

/// Draw both figures from a derived table
pub fn render_figures(
    table: &ExaminationTable,
    config: &VisualizerConfig,
) -> Result<(CategoricalFigure, HeatmapFigure)> {
    if config.parallel_render {
        let (categorical, heatmap) = rayon::join(
            || draw_cat_plot(table, config),
            || draw_heat_map(table, config),
        );
        Ok((categorical?, heatmap?))
    } else {
        let categorical = draw_cat_plot(table, config)?;
        let heatmap = draw_heat_map(table, config)?;
        Ok((categorical, heatmap))
    }
}

/// Run every stage with the given configuration
pub fn run(config: &VisualizerConfig) -> Result<PipelineReport> {
    let start = Instant::now();
    let table = prepare_table(&config.input_path)?;
    let (categorical, heatmap) = render_figures(&table, config)?;

    info!(
        "Wrote {} and {} in {:?}",
        categorical.path.display(),
        heatmap.path.display(),
        start.elapsed()
    );

    Ok(PipelineReport {
        rows: table.num_rows(),
        categorical,
        heatmap,
    })
}
