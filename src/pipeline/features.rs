//! Feature extraction, reshaping and polynomial expansion

use anyhow::{Context, Result};
use faer::{Mat, MatRef};
use polars::prelude::*;
use thiserror::Error;

/// Errors raised while turning columns into design matrices
#[derive(Error, Debug, PartialEq)]
pub enum FeatureError {
    #[error("Cannot reshape {found} values into a {rows} x 1 matrix")]
    ShapeMismatch { rows: usize, found: usize },

    #[error("Polynomial degree must be at least 1")]
    ZeroDegree,

    #[error("Polynomial expansion expects a single input column, got {0}")]
    NotSingleColumn(usize),
}

/// Extract a numeric column as `f64` values, failing on unknown values
pub fn column_values(df: &DataFrame, column: &str) -> Result<Vec<f64>> {
    let col = df
        .column(column)
        .with_context(|| format!("Column '{}' not found", column))?
        .cast(&DataType::Float64)
        .with_context(|| format!("Column '{}' is not numeric", column))?;

    if col.null_count() > 0 {
        anyhow::bail!(
            "Column '{}' has {} unknown value(s) and cannot be used for fitting",
            column,
            col.null_count()
        );
    }

    Ok(col.f64()?.into_no_null_iter().collect())
}

/// Reshape a flat vector into a `rows x 1` matrix.
///
/// The length must match `rows` exactly.
pub fn reshape_column(values: &[f64], rows: usize) -> Result<Mat<f64>, FeatureError> {
    if values.len() != rows {
        return Err(FeatureError::ShapeMismatch {
            rows,
            found: values.len(),
        });
    }
    Ok(Mat::from_fn(rows, 1, |i, _| values[i]))
}

/// Expands a single input column into its powers `[x, x², …, x^degree]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolynomialFeatures {
    pub degree: usize,
    /// Prepend a column of ones (the zeroth power)
    pub include_bias: bool,
}

impl PolynomialFeatures {
    pub fn new(degree: usize) -> Result<Self, FeatureError> {
        if degree == 0 {
            return Err(FeatureError::ZeroDegree);
        }
        Ok(Self {
            degree,
            include_bias: false,
        })
    }

    pub fn with_bias(mut self, include_bias: bool) -> Self {
        self.include_bias = include_bias;
        self
    }

    /// Number of output columns
    pub fn output_width(&self) -> usize {
        self.degree + usize::from(self.include_bias)
    }

    pub fn transform(&self, x: MatRef<'_, f64>) -> Result<Mat<f64>, FeatureError> {
        if x.ncols() != 1 {
            return Err(FeatureError::NotSingleColumn(x.ncols()));
        }
        let offset = usize::from(!self.include_bias);
        Ok(Mat::from_fn(x.nrows(), self.output_width(), |i, j| {
            x[(i, 0)].powi((j + offset) as i32)
        }))
    }
}
