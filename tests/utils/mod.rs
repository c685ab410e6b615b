use std::fmt::Write as _;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use medical_visualizer::loader::read_csv_from;
use medical_visualizer::{ExaminationTable, VisualizerConfig, derive_features};
use plotters::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const HEADER: &str =
    "id,age,gender,height,weight,ap_hi,ap_lo,cholesterol,gluc,smoke,alco,active,cardio";

/// One examination row; identifiers are assigned on serialization
#[derive(Debug, Clone, Copy)]
pub struct Subject {
    pub height: i64,
    pub weight: f64,
    pub ap_hi: i64,
    pub ap_lo: i64,
    pub cholesterol: i64,
    pub gluc: i64,
    pub smoke: i64,
    pub alco: i64,
    pub active: i64,
    pub cardio: i64,
}

impl Default for Subject {
    fn default() -> Self {
        Self {
            height: 170,
            weight: 70.0,
            ap_hi: 120,
            ap_lo: 80,
            cholesterol: 1,
            gluc: 1,
            smoke: 0,
            alco: 0,
            active: 1,
            cardio: 0,
        }
    }
}

/// Render subjects as CSV text with a header row
#[must_use]
pub fn csv_text(subjects: &[Subject]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for (id, s) in subjects.iter().enumerate() {
        writeln!(
            out,
            "{id},{},1,{},{:.1},{},{},{},{},{},{},{},{}",
            18000 + id * 3,
            s.height,
            s.weight,
            s.ap_hi,
            s.ap_lo,
            s.cholesterol,
            s.gluc,
            s.smoke,
            s.alco,
            s.active,
            s.cardio
        )
        .unwrap();
    }
    out
}

/// Write subjects to `medical_examination.csv` inside `dir`
pub fn write_csv(dir: &Path, subjects: &[Subject]) -> PathBuf {
    let path = dir.join("medical_examination.csv");
    std::fs::write(&path, csv_text(subjects)).unwrap();
    path
}

/// Raw table, before feature derivation
#[must_use]
pub fn raw_table(subjects: &[Subject]) -> ExaminationTable {
    let batch = read_csv_from(Cursor::new(csv_text(subjects))).unwrap();
    ExaminationTable::try_new(batch).unwrap()
}

/// Table with `overweight` and normalized levels
#[must_use]
pub fn derived_table(subjects: &[Subject]) -> ExaminationTable {
    derive_features(raw_table(subjects)).unwrap()
}

/// Reproducible population with a few implausible pressures and outliers
#[must_use]
pub fn synthetic_subjects(count: usize, seed: u64) -> Vec<Subject> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let height = rng.random_range(150..=195);
            let bmi: f64 = rng.random_range(18.0..34.0);
            let weight = (bmi * (height as f64 / 100.0).powi(2) * 10.0).round() / 10.0;
            let ap_lo = rng.random_range(60..=100);
            // Roughly one row in ten records diastolic above systolic
            let ap_hi = if rng.random_bool(0.1) {
                ap_lo - rng.random_range(5..=20)
            } else {
                ap_lo + rng.random_range(20..=60)
            };
            Subject {
                height,
                weight,
                ap_hi,
                ap_lo,
                cholesterol: rng.random_range(1..=3),
                gluc: rng.random_range(1..=3),
                smoke: i64::from(rng.random_bool(0.2)),
                alco: i64::from(rng.random_bool(0.1)),
                active: i64::from(rng.random_bool(0.8)),
                // Alternate so both panels are always populated
                cardio: (i % 2) as i64,
            }
        })
        .collect()
}

/// Configuration writing into `dir`
#[must_use]
pub fn test_config(dir: &Path) -> VisualizerConfig {
    VisualizerConfig {
        input_path: dir.join("medical_examination.csv"),
        output_dir: dir.to_path_buf(),
        ..Default::default()
    }
}

/// Whether plotters can resolve a sans-serif font on this machine
///
/// Text rendering fails without one, so figure tests return early instead.
#[must_use]
pub fn fonts_available() -> bool {
    let mut buffer = vec![0u8; 32 * 32 * 3];
    let root = BitMapBackend::with_buffer(&mut buffer, (32, 32)).into_drawing_area();
    let drawn = root.draw(&Text::new("0", (1, 1), ("sans-serif", 12).into_font()));
    drawn.is_ok()
}
