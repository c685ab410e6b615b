use medical_visualizer::{
    VisualizerError, draw_cat_plot, draw_heat_map, load_examinations, prepare_table, run,
};
use tempfile::TempDir;

use crate::utils::{fonts_available, synthetic_subjects, test_config, write_csv};

#[test]
fn test_plots_require_derived_features() {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path());
    let path = write_csv(dir.path(), &synthetic_subjects(20, 73));
    let raw = load_examinations(&path).unwrap();

    assert!(matches!(
        draw_cat_plot(&raw, &config),
        Err(VisualizerError::InvalidData(_))
    ));
    assert!(matches!(
        draw_heat_map(&raw, &config),
        Err(VisualizerError::InvalidData(_))
    ));
    assert!(!config.catplot_path().exists());
    assert!(!config.heatmap_path().exists());
}

#[test]
fn test_prepare_table_derives_features() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(dir.path(), &synthetic_subjects(30, 79));
    let table = prepare_table(&path).unwrap();

    assert!(table.has_derived_features());
    assert_eq!(table.num_rows(), 30);
}

#[test]
fn test_run_writes_both_figures() {
    if !fonts_available() {
        eprintln!("skipping: no sans-serif font available for plotters");
        return;
    }
    let dir = TempDir::new().unwrap();
    let subjects = synthetic_subjects(400, 83);
    write_csv(dir.path(), &subjects);
    let config = test_config(dir.path());
    // Stale files from an earlier run are replaced
    std::fs::write(config.catplot_path(), b"stale").unwrap();
    std::fs::write(config.heatmap_path(), b"stale").unwrap();

    let report = run(&config).unwrap();

    assert_eq!(report.rows, subjects.len());
    assert_eq!(report.categorical.panels, vec![0, 1]);
    assert!(report.heatmap.rows > 0 && report.heatmap.rows < subjects.len());
    for path in [config.catplot_path(), config.heatmap_path()] {
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"\x89PNG"), "{} is not a PNG", path.display());
    }
}

#[test]
fn test_parallel_render_matches_sequential() {
    if !fonts_available() {
        eprintln!("skipping: no sans-serif font available for plotters");
        return;
    }
    let dir = TempDir::new().unwrap();
    write_csv(dir.path(), &synthetic_subjects(200, 89));
    let sequential = run(&test_config(dir.path())).unwrap();

    let parallel_config = medical_visualizer::VisualizerConfig {
        parallel_render: true,
        ..test_config(dir.path())
    };
    let parallel = run(&parallel_config).unwrap();

    assert_eq!(
        serde_json::to_string(&sequential.categorical.counts).unwrap(),
        serde_json::to_string(&parallel.categorical.counts).unwrap()
    );
    assert_eq!(
        serde_json::to_string(&sequential.heatmap.matrix).unwrap(),
        serde_json::to_string(&parallel.heatmap.matrix).unwrap()
    );
}
