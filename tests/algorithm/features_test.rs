use std::io::Cursor;

use medical_visualizer::algorithm::cleaning::clean_for_heatmap;
use medical_visualizer::loader::read_csv_from;
use medical_visualizer::schema::{CHOLESTEROL, GLUC, ID, OVERWEIGHT};
use medical_visualizer::utils::float_values;
use medical_visualizer::{ExaminationTable, VisualizerError, derive_features};

use crate::utils::{HEADER, Subject, derived_table, raw_table, synthetic_subjects};

#[test]
fn test_overweight_flags_bmi_above_threshold() {
    // BMI 24.2, 27.3, 24.2, 27.3
    let subjects = [
        Subject { height: 170, weight: 70.0, ..Default::default() },
        Subject { height: 160, weight: 70.0, ..Default::default() },
        Subject { height: 170, weight: 70.0, cardio: 1, ..Default::default() },
        Subject { height: 160, weight: 70.0, cardio: 1, ..Default::default() },
    ];
    let table = derived_table(&subjects);

    let overweight = table.int_values(OVERWEIGHT).unwrap();
    assert_eq!(overweight, vec![Some(0), Some(1), Some(0), Some(1)]);
}

#[test]
fn test_bmi_of_exactly_25_is_not_overweight() {
    // 200 cm, 100 kg is BMI 25.0 exactly
    let table = derived_table(&[Subject { height: 200, weight: 100.0, ..Default::default() }]);
    assert_eq!(table.int_values(OVERWEIGHT).unwrap(), vec![Some(0)]);
}

#[test]
fn test_fractional_height_keeps_bmi_below_threshold() {
    // 165.5 cm / 68.3 kg is BMI 24.94; truncating to 165 cm would give 25.09
    let csv = format!(
        "{HEADER}\n\
         0,18000,1,165.5,68.3,120.4,120.5,1,1,0,0,1,0\n\
         1,18001,1,165.0,68.3,130.0,80.0,1,1,0,0,1,1\n\
         2,18002,1,170.0,70.0,120.5,120.4,1,1,0,0,1,0\n"
    );
    let batch = read_csv_from(Cursor::new(csv)).unwrap();
    let table = derive_features(ExaminationTable::try_new(batch).unwrap()).unwrap();

    assert_eq!(
        table.int_values(OVERWEIGHT).unwrap(),
        vec![Some(0), Some(1), Some(0)]
    );

    // Full-range bands leave only the pressure condition: 120.5 > 120.4 drops row 0
    let subset = clean_for_heatmap(&table, 0.0, 1.0).unwrap();
    let ids = float_values(&subset.batch, ID).unwrap();
    assert_eq!(ids, vec![Some(1.0), Some(2.0)]);
}

#[test]
fn test_levels_are_normalized_to_binary() {
    let subjects = [1, 2, 3].map(|level| Subject {
        cholesterol: level,
        gluc: 4 - level,
        ..Default::default()
    });
    let table = derived_table(&subjects);

    assert_eq!(
        table.int_values(CHOLESTEROL).unwrap(),
        vec![Some(0), Some(1), Some(1)]
    );
    assert_eq!(table.int_values(GLUC).unwrap(), vec![Some(1), Some(1), Some(0)]);
}

#[test]
fn test_derivation_preserves_rows_and_appends_column() {
    let subjects = synthetic_subjects(200, 7);
    let raw = raw_table(&subjects);
    let raw_columns = raw.column_names();
    let derived = derive_features(raw).unwrap();

    assert_eq!(derived.num_rows(), subjects.len());
    let columns = derived.column_names();
    assert_eq!(columns.len(), raw_columns.len() + 1);
    assert_eq!(columns[..raw_columns.len()], raw_columns[..]);
    assert_eq!(columns.last().map(String::as_str), Some(OVERWEIGHT));
}

#[test]
fn test_derived_indicators_are_binary() {
    let table = derived_table(&synthetic_subjects(500, 11));
    for column in [CHOLESTEROL, GLUC, OVERWEIGHT] {
        let values = table.int_values(column).unwrap();
        assert!(
            values.iter().all(|v| matches!(v, Some(0 | 1))),
            "{column} has values outside {{0, 1}}"
        );
    }
}

#[test]
fn test_deriving_twice_is_rejected() {
    let table = derived_table(&synthetic_subjects(10, 3));
    let err = derive_features(table).unwrap_err();
    assert!(matches!(err, VisualizerError::InvalidData(_)));
}
