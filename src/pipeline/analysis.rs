//! Fits both curves and the correlation for one pair of columns

use anyhow::{Context, Result};
use polars::prelude::*;

use super::correlation::pearson_correlation;
use super::features::column_values;
use super::regression::CurveFit;

/// Everything computed for one regressor/response pair
#[derive(Debug, Clone)]
pub struct Analysis {
    pub x_column: String,
    pub y_column: String,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub linear: CurveFit,
    pub polynomial: CurveFit,
    pub correlation: f64,
}

impl Analysis {
    pub fn rows(&self) -> usize {
        self.xs.len()
    }
}

/// Fit a line and a polynomial of `degree` mapping `x_column` onto
/// `y_column`, and correlate the two columns.
///
/// Every row of the frame must contribute a sample.
pub fn analyze(df: &DataFrame, x_column: &str, y_column: &str, degree: usize) -> Result<Analysis> {
    let rows = df.height();
    let xs = column_values(df, x_column)?;
    let ys = column_values(df, y_column)?;
    if xs.len() != rows || ys.len() != rows {
        anyhow::bail!(
            "Expected {} samples per column, got {} and {}",
            rows,
            xs.len(),
            ys.len()
        );
    }

    let linear = CurveFit::linear(&xs, &ys)
        .with_context(|| format!("Linear fit of {} on {} failed", y_column, x_column))?;
    let polynomial = CurveFit::polynomial(&xs, &ys, degree)
        .with_context(|| format!("Polynomial fit of {} on {} failed", y_column, x_column))?;
    let correlation = pearson_correlation(&xs, &ys)
        .with_context(|| format!("Correlation of {} and {} failed", x_column, y_column))?;

    Ok(Analysis {
        x_column: x_column.to_string(),
        y_column: y_column.to_string(),
        xs,
        ys,
        linear,
        polynomial,
        correlation,
    })
}
