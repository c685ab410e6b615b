//! Configuration for the visualizer.

use std::fmt;
use std::path::PathBuf;

/// Default input file, resolved against the working directory
pub const DEFAULT_INPUT: &str = "medical_examination.csv";

/// File name of the categorical bar chart
pub const CATPLOT_FILE: &str = "catplot.png";

/// File name of the correlation heatmap
pub const HEATMAP_FILE: &str = "heatmap.png";

/// Configuration for a visualizer run
#[derive(Debug, Clone)]
pub struct VisualizerConfig {
    /// Examination data to load (CSV or Parquet)
    pub input_path: PathBuf,
    /// Directory receiving `catplot.png` and `heatmap.png`
    pub output_dir: PathBuf,
    /// Lower quantile of the height/weight band filter
    pub lower_quantile: f64,
    /// Upper quantile of the height/weight band filter
    pub upper_quantile: f64,
    /// Render both figures concurrently
    pub parallel_render: bool,
    /// Pixel size of the categorical plot (two panels side by side)
    pub catplot_size: (u32, u32),
    /// Pixel size of the heatmap
    pub heatmap_size: (u32, u32),
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from("."),
            lower_quantile: 0.025,
            upper_quantile: 0.975,
            parallel_render: false,
            catplot_size: (1000, 500),
            heatmap_size: (1200, 1200),
        }
    }
}

impl VisualizerConfig {
    /// Where the categorical plot is written
    #[must_use]
    pub fn catplot_path(&self) -> PathBuf {
        self.output_dir.join(CATPLOT_FILE)
    }

    /// Where the heatmap is written
    #[must_use]
    pub fn heatmap_path(&self) -> PathBuf {
        self.output_dir.join(HEATMAP_FILE)
    }
}

impl fmt::Display for VisualizerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Visualizer Configuration:")?;
        writeln!(f, "  Input: {}", self.input_path.display())?;
        writeln!(f, "  Output Directory: {}", self.output_dir.display())?;
        writeln!(
            f,
            "  Percentile Band: [{}, {}]",
            self.lower_quantile, self.upper_quantile
        )?;
        writeln!(f, "  Parallel Render: {}", self.parallel_render)?;
        Ok(())
    }
}
