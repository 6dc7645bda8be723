//! Fixed record layout of the WPBC (prognostic breast cancer) data file
//!
//! Each record carries an identifier, the outcome, a time value and 32
//! numeric measurements. Fields 4-33 are the mean, standard error and
//! "worst" value of ten nucleus features computed for each image.

use polars::prelude::*;

/// Number of positional fields in every record
pub const EXPECTED_COLUMNS: usize = 35;

/// Column names in positional order
pub const COLUMN_NAMES: [&str; EXPECTED_COLUMNS] = [
    "id",
    "outcome",
    "time",
    "mean_radius",
    "mean_texture",
    "mean_perimeter",
    "mean_area",
    "mean_smoothness",
    "mean_compactness",
    "mean_concavity",
    "mean_concave_points",
    "mean_symmetry",
    "mean_fractal_dimension",
    "se_radius",
    "se_texture",
    "se_perimeter",
    "se_area",
    "se_smoothness",
    "se_compactness",
    "se_concavity",
    "se_concave_points",
    "se_symmetry",
    "se_fractal_dimension",
    "worst_radius",
    "worst_texture",
    "worst_perimeter",
    "worst_area",
    "worst_smoothness",
    "worst_compactness",
    "worst_concavity",
    "worst_concave_points",
    "worst_symmetry",
    "worst_fractal_dimension",
    "tumor_size",
    "lymph_node_status",
];

/// Token the source file uses for an unknown value
pub const NULL_TOKEN: &str = "?";

/// Type each column is coerced to after parsing
pub fn column_dtype(name: &str) -> DataType {
    match name {
        "id" => DataType::Int64,
        "outcome" => DataType::String,
        _ => DataType::Float64,
    }
}

/// Whether a column may contain unknown values.
///
/// Only the lymph node status is ever unrecorded in the source data.
pub fn is_nullable(name: &str) -> bool {
    name == "lymph_node_status"
}

/// Whether a column is a numeric measurement usable for fitting
pub fn is_numeric_feature(name: &str) -> bool {
    COLUMN_NAMES.contains(&name) && name != "id" && name != "outcome"
}

/// Names of all numeric feature columns, in positional order
pub fn numeric_features() -> Vec<&'static str> {
    COLUMN_NAMES
        .iter()
        .copied()
        .filter(|name| is_numeric_feature(name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_layout() {
        assert_eq!(COLUMN_NAMES.len(), 35);
        assert_eq!(COLUMN_NAMES[0], "id");
        assert_eq!(COLUMN_NAMES[5], "mean_perimeter");
        assert_eq!(COLUMN_NAMES[6], "mean_area");
        assert_eq!(COLUMN_NAMES[13], "se_radius");
        assert_eq!(COLUMN_NAMES[23], "worst_radius");
        assert_eq!(COLUMN_NAMES[34], "lymph_node_status");
    }

    #[test]
    fn test_numeric_features_exclude_identity_columns() {
        let features = numeric_features();
        assert_eq!(features.len(), 33);
        assert!(!features.contains(&"id"));
        assert!(!features.contains(&"outcome"));
        assert!(features.contains(&"time"));
        assert!(!is_numeric_feature("not_a_column"));
    }

    #[test]
    fn test_column_dtypes() {
        assert_eq!(column_dtype("id"), DataType::Int64);
        assert_eq!(column_dtype("outcome"), DataType::String);
        assert_eq!(column_dtype("mean_area"), DataType::Float64);
    }
}
