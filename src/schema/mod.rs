//! Schema definitions for medical examination data

use arrow::datatypes::{DataType, Field, Schema};
use std::sync::Arc;

pub const ID: &str = "id";
pub const AGE: &str = "age";
pub const GENDER: &str = "gender";
pub const HEIGHT: &str = "height";
pub const WEIGHT: &str = "weight";
pub const AP_HI: &str = "ap_hi";
pub const AP_LO: &str = "ap_lo";
pub const CHOLESTEROL: &str = "cholesterol";
pub const GLUC: &str = "gluc";
pub const SMOKE: &str = "smoke";
pub const ALCO: &str = "alco";
pub const ACTIVE: &str = "active";
pub const CARDIO: &str = "cardio";

/// Derived column, appended by feature derivation
pub const OVERWEIGHT: &str = "overweight";

/// Indicators reshaped by the categorical plot, in display order
pub const INDICATOR_COLUMNS: [&str; 6] = [CHOLESTEROL, GLUC, SMOKE, ALCO, ACTIVE, OVERWEIGHT];

/// Get the Arrow schema for raw examination data
///
/// Measurements are `Float64` and codes are `Int64`. Height is in
/// centimetres, weight in kilograms. Cholesterol and glucose
/// are on a 1 (normal) to 3 (well above normal) scale; `smoke`, `alco`,
/// `active` and `cardio` are 0/1 flags.
#[must_use]
pub fn examination_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new(ID, DataType::Int64, true),
        Field::new(AGE, DataType::Int64, true),
        Field::new(GENDER, DataType::Int64, true),
        Field::new(HEIGHT, DataType::Float64, true),
        Field::new(WEIGHT, DataType::Float64, true),
        Field::new(AP_HI, DataType::Float64, true),
        Field::new(AP_LO, DataType::Float64, true),
        Field::new(CHOLESTEROL, DataType::Int64, true),
        Field::new(GLUC, DataType::Int64, true),
        Field::new(SMOKE, DataType::Int64, true),
        Field::new(ALCO, DataType::Int64, true),
        Field::new(ACTIVE, DataType::Int64, true),
        Field::new(CARDIO, DataType::Int64, true),
    ]))
}

/// Whether a data type takes part in the correlation matrix
#[must_use]
pub fn is_numeric(data_type: &DataType) -> bool {
    matches!(
        data_type,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float16
            | DataType::Float32
            | DataType::Float64
    )
}
