use anyhow::Context;
use log::info;
use medical_visualizer::{VisualizerConfig, pipeline};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = VisualizerConfig::default();
    info!("{config}");

    let report = pipeline::run(&config).with_context(|| {
        format!(
            "Failed to visualize examinations from {}",
            config.input_path.display()
        )
    })?;

    info!(
        "Processed {} examinations; heatmap used {} rows",
        report.rows, report.heatmap.rows
    );
    Ok(())
}
