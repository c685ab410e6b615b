//! Lower-triangle correlation heatmap
//!
//! Cells are drawn directly on the root area so they stay square: one
//! rectangle per visible cell, annotated with the value to one decimal, and
//! a colour bar at half the grid height on the right. Masked cells and
//! undefined (NaN) correlations are left blank.

use std::path::{Path, PathBuf};

use plotters::prelude::*;
use plotters::style::FontTransform;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use serde::Serialize;

use crate::algorithm::cleaning::CleaningBounds;
use crate::algorithm::statistics::CorrelationMatrix;
use crate::error::{Result, VisualizerError};
use crate::plot::colormap::diverging_color;

const MARGIN_TOP: i32 = 40;
const MARGIN_LEFT: i32 = 150;
const MARGIN_BOTTOM: i32 = 150;
const MARGIN_RIGHT: i32 = 170;
const COLORBAR_GAP: i32 = 40;
const COLORBAR_WIDTH: i32 = 30;
/// Fraction of the grid height taken by the colour bar
const COLORBAR_SHRINK: f64 = 0.5;
const COLORBAR_TICKS: usize = 5;
const FONT_SIZE_LABEL: u32 = 18;

/// What the heatmap shows, alongside the written image
#[derive(Debug, Clone, Serialize)]
pub struct HeatmapFigure {
    /// Full matrix, including the cells hidden by the mask
    pub matrix: CorrelationMatrix,
    /// `true` for cells left out of the drawing
    pub mask: Vec<Vec<bool>>,
    /// Rows that survived the plausibility filter
    pub rows: usize,
    /// Height and weight bands of the filter
    pub bounds: CleaningBounds,
    /// Image written to disk
    pub path: PathBuf,
}

/// Annotation text of a cell
#[must_use]
pub fn annotation(value: f64) -> String {
    format!("{value:.1}")
}

/// Whether cell (`row`, `col`) gets a fill and an annotation
#[must_use]
pub fn is_drawn(matrix: &CorrelationMatrix, mask: &[Vec<bool>], row: usize, col: usize) -> bool {
    !mask[row][col] && !matrix.get(row, col).is_nan()
}

/// Half-width of the colour scale: the largest visible magnitude
#[must_use]
pub fn color_scale(matrix: &CorrelationMatrix, mask: &[Vec<bool>]) -> f64 {
    let scale = (0..matrix.len())
        .flat_map(|i| (0..matrix.len()).map(move |j| (i, j)))
        .filter(|&(i, j)| is_drawn(matrix, mask, i, j))
        .map(|(i, j)| matrix.get(i, j).abs())
        .fold(0.0_f64, f64::max);

    if scale > 0.0 { scale } else { 1.0 }
}

/// Render the visible cells of the matrix and write a PNG
pub fn render_heatmap(
    matrix: &CorrelationMatrix,
    mask: &[Vec<bool>],
    path: &Path,
    size: (u32, u32),
) -> Result<()> {
    let (width, height) = (size.0 as i32, size.1 as i32);
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(VisualizerError::plot)?;

    let n = matrix.len().max(1) as i32;
    let available = (width - MARGIN_LEFT - MARGIN_RIGHT).min(height - MARGIN_TOP - MARGIN_BOTTOM);
    let cell = (available / n).max(1);
    let grid = cell * n;
    let scale = color_scale(matrix, mask);

    let value_font = (FONT_SIZE_LABEL as f64 * (cell as f64 / 60.0).clamp(0.6, 1.2)) as u32;
    let row_label_style = ("sans-serif", FONT_SIZE_LABEL)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Right, VPos::Center));
    let col_label_style = ("sans-serif", FONT_SIZE_LABEL)
        .into_font()
        .transform(FontTransform::Rotate90)
        .color(&BLACK);

    for (i, name) in matrix.columns.iter().enumerate() {
        let offset = i as i32 * cell + cell / 2;
        root.draw(&Text::new(
            name.clone(),
            (MARGIN_LEFT - 8, MARGIN_TOP + offset),
            row_label_style.clone(),
        ))
        .map_err(VisualizerError::plot)?;
        root.draw(&Text::new(
            name.clone(),
            (MARGIN_LEFT + offset + FONT_SIZE_LABEL as i32 / 2, MARGIN_TOP + grid + 8),
            col_label_style.clone(),
        ))
        .map_err(VisualizerError::plot)?;
    }

    for i in 0..matrix.len() {
        for j in 0..matrix.len() {
            if !is_drawn(matrix, mask, i, j) {
                continue;
            }
            let value = matrix.get(i, j);
            let x0 = MARGIN_LEFT + j as i32 * cell;
            let y0 = MARGIN_TOP + i as i32 * cell;
            root.draw(&Rectangle::new(
                [(x0, y0), (x0 + cell, y0 + cell)],
                diverging_color(value, scale).filled(),
            ))
            .map_err(VisualizerError::plot)?;

            // Light text on strongly coloured cells
            let text_color = if value.abs() / scale > 0.6 { WHITE } else { BLACK };
            let style = ("sans-serif", value_font)
                .into_font()
                .color(&text_color)
                .pos(Pos::new(HPos::Center, VPos::Center));
            root.draw(&Text::new(annotation(value), (x0 + cell / 2, y0 + cell / 2), style))
                .map_err(VisualizerError::plot)?;
        }
    }

    draw_colorbar(&root, grid, scale)?;
    root.present().map_err(VisualizerError::plot)?;
    Ok(())
}

fn draw_colorbar(
    root: &DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>,
    grid: i32,
    scale: f64,
) -> Result<()> {
    let bar_height = ((grid as f64 * COLORBAR_SHRINK) as i32).max(1);
    let x0 = MARGIN_LEFT + grid + COLORBAR_GAP;
    let y0 = MARGIN_TOP + (grid - bar_height) / 2;

    for step in 0..bar_height {
        // Top of the bar is +scale, bottom is -scale
        let value = scale - 2.0 * scale * f64::from(step) / f64::from(bar_height);
        root.draw(&Rectangle::new(
            [(x0, y0 + step), (x0 + COLORBAR_WIDTH, y0 + step + 1)],
            diverging_color(value, scale).filled(),
        ))
        .map_err(VisualizerError::plot)?;
    }
    root.draw(&Rectangle::new(
        [(x0, y0), (x0 + COLORBAR_WIDTH, y0 + bar_height)],
        BLACK.stroke_width(1),
    ))
    .map_err(VisualizerError::plot)?;

    let tick_style = ("sans-serif", FONT_SIZE_LABEL)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));
    for tick in 0..COLORBAR_TICKS {
        let fraction = tick as f64 / (COLORBAR_TICKS - 1) as f64;
        let value = scale - 2.0 * scale * fraction;
        let y = y0 + (fraction * f64::from(bar_height)) as i32;
        root.draw(&PathElement::new(
            vec![(x0 + COLORBAR_WIDTH, y), (x0 + COLORBAR_WIDTH + 5, y)],
            &BLACK,
        ))
        .map_err(VisualizerError::plot)?;
        root.draw(&Text::new(
            format!("{value:.1}"),
            (x0 + COLORBAR_WIDTH + 8, y),
            tick_style.clone(),
        ))
        .map_err(VisualizerError::plot)?;
    }

    Ok(())
}
