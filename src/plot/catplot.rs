//! Grouped bar chart of indicator counts, one panel per `cardio` value

use std::path::{Path, PathBuf};

use itertools::Itertools;
use plotters::coord::Shift;
use plotters::prelude::*;
use serde::Serialize;

use crate::algorithm::categorical::{CategoryCount, panel_values};
use crate::error::{Result, VisualizerError};
use crate::plot::colormap::category_color;
use crate::plot::{FONT_SIZE_AXIS, FONT_SIZE_TITLE, PLOT_MARGIN};
use crate::schema::INDICATOR_COLUMNS;

/// Share of a slot taken by one bar group
const GROUP_WIDTH: f64 = 0.8;

/// What the categorical plot shows, alongside the written image
#[derive(Debug, Clone, Serialize)]
pub struct CategoricalFigure {
    /// Aggregated counts behind the bars
    pub counts: Vec<CategoryCount>,
    /// `cardio` value of each panel, left to right
    pub panels: Vec<i64>,
    /// Image written to disk
    pub path: PathBuf,
}

/// Indicator name for an x position, blank between slots
fn indicator_label(x: f64) -> String {
    let slot = x.round();
    if (x - slot).abs() > 1e-6 || slot < 0.0 {
        return String::new();
    }
    INDICATOR_COLUMNS
        .get(slot as usize)
        .map(ToString::to_string)
        .unwrap_or_default()
}

/// Counts are whole numbers, so the y axis carries no decimals
fn count_label(y: f64) -> String {
    format!("{y:.0}")
}

fn slot_of(variable: &str) -> Option<usize> {
    INDICATOR_COLUMNS.iter().position(|c| *c == variable)
}

/// Render the counts as side-by-side panels and write a PNG
pub fn render_catplot(counts: &[CategoryCount], path: &Path, size: (u32, u32)) -> Result<Vec<i64>> {
    let panels = panel_values(counts);
    // Hue order is shared across panels so colours line up
    let hues: Vec<i64> = counts.iter().map(|c| c.value).sorted().dedup().collect();
    let y_max = counts.iter().map(|c| c.total).max().unwrap_or(0).max(1) as f64 * 1.05;

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(VisualizerError::plot)?;

    let areas = root.split_evenly((1, panels.len().max(1)));
    for (area, cardio) in areas.iter().zip(&panels) {
        let panel_counts: Vec<&CategoryCount> =
            counts.iter().filter(|c| c.cardio == *cardio).collect();
        draw_panel(area, *cardio, &panel_counts, &hues, y_max)?;
    }

    root.present().map_err(VisualizerError::plot)?;
    Ok(panels)
}

fn draw_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    cardio: i64,
    counts: &[&CategoryCount],
    hues: &[i64],
    y_max: f64,
) -> Result<()> {
    let slots = INDICATOR_COLUMNS.len();
    let mut chart = ChartBuilder::on(area)
        .margin(PLOT_MARGIN)
        .caption(format!("cardio = {cardio}"), ("sans-serif", FONT_SIZE_TITLE))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5f64..(slots as f64 - 0.5), 0f64..y_max)
        .map_err(VisualizerError::plot)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(slots)
        .x_label_formatter(&|x: &f64| indicator_label(*x))
        .y_label_formatter(&|y: &f64| count_label(*y))
        .x_desc("variable")
        .y_desc("total")
        .axis_desc_style(("sans-serif", FONT_SIZE_AXIS))
        .draw()
        .map_err(VisualizerError::plot)?;

    let bar_width = GROUP_WIDTH / hues.len().max(1) as f64;
    for (rank, hue) in hues.iter().enumerate() {
        let color = category_color(rank);
        let bars = counts
            .iter()
            .filter(|c| c.value == *hue)
            .filter_map(|c| slot_of(&c.variable).map(|slot| (slot, c.total)))
            .map(|(slot, total)| {
                let x0 = slot as f64 - GROUP_WIDTH / 2.0 + rank as f64 * bar_width;
                Rectangle::new([(x0, 0.0), (x0 + bar_width, total as f64)], color.filled())
            });

        chart
            .draw_series(bars)
            .map_err(VisualizerError::plot)?
            .label(format!("value = {hue}"))
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .border_style(&BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(VisualizerError::plot)?;

    Ok(())
}
