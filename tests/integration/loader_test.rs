use std::fs::File;

use medical_visualizer::{VisualizerError, load_examinations};
use parquet::arrow::ArrowWriter;
use tempfile::TempDir;

use crate::utils::{HEADER, synthetic_subjects, write_csv};

#[test]
fn test_load_csv_file() {
    let dir = TempDir::new().unwrap();
    let subjects = synthetic_subjects(50, 67);
    let path = write_csv(dir.path(), &subjects);

    let table = load_examinations(&path).unwrap();
    assert_eq!(table.num_rows(), subjects.len());
    assert!(!table.has_derived_features());
    assert_eq!(
        table.float_values("height").unwrap()[0],
        Some(subjects[0].height as f64)
    );
}

#[test]
fn test_fractional_measurements_load_as_parsed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fractional.csv");
    std::fs::write(
        &path,
        format!("{HEADER}\n0,18000,1,165.5,68.3,120.4,120.5,1,1,0,0,1,0\n"),
    )
    .unwrap();

    let table = load_examinations(&path).unwrap();
    assert_eq!(table.float_values("height").unwrap(), vec![Some(165.5)]);
    assert_eq!(table.float_values("ap_hi").unwrap(), vec![Some(120.4)]);
    assert_eq!(table.float_values("ap_lo").unwrap(), vec![Some(120.5)]);
}

#[test]
fn test_fractional_code_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fractional_code.csv");
    std::fs::write(&path, format!("{HEADER}\n0,18000,1,170,70.0,120,80,2.5,1,0,0,1,0\n")).unwrap();

    match load_examinations(&path) {
        Err(VisualizerError::InvalidData(msg)) => assert!(msg.contains("cholesterol")),
        other => panic!("expected an invalid data error, got {other:?}"),
    }
}

#[test]
fn test_parquet_matches_csv() {
    let dir = TempDir::new().unwrap();
    let csv_path = write_csv(dir.path(), &synthetic_subjects(80, 71));
    let from_csv = load_examinations(&csv_path).unwrap();

    let parquet_path = dir.path().join("medical_examination.parquet");
    let file = File::create(&parquet_path).unwrap();
    let mut writer = ArrowWriter::try_new(file, from_csv.batch().schema(), None).unwrap();
    writer.write(from_csv.batch()).unwrap();
    writer.close().unwrap();

    let from_parquet = load_examinations(&parquet_path).unwrap();
    assert_eq!(from_parquet.column_names(), from_csv.column_names());
    assert_eq!(from_parquet.batch().columns(), from_csv.batch().columns());
}

#[test]
fn test_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.csv");

    match load_examinations(&path) {
        Err(VisualizerError::Io { path: Some(p), .. }) => assert_eq!(p, path),
        other => panic!("expected an I/O error, got {other:?}"),
    }
}

#[test]
fn test_missing_column_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.csv");
    std::fs::write(&path, "id,age,height\n0,18000,170\n").unwrap();

    match load_examinations(&path) {
        Err(VisualizerError::ColumnNotFound { .. }) => {}
        other => panic!("expected a missing column error, got {other:?}"),
    }
}
