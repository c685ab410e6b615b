//! PNG rendering of the two figures
//!
//! Both renderers write through the plotters bitmap backend and overwrite
//! any existing file at the target path.

pub mod catplot;
pub mod colormap;
pub mod heatmap;

pub use catplot::{CategoricalFigure, render_catplot};
pub use heatmap::{HeatmapFigure, render_heatmap};

pub(crate) const PLOT_MARGIN: i32 = 20;
pub(crate) const FONT_SIZE_TITLE: u32 = 20;
pub(crate) const FONT_SIZE_AXIS: u32 = 15;
