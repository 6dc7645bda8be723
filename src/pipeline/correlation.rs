//! Pearson product-moment correlation between two numeric columns

use anyhow::Result;
use polars::prelude::*;
use thiserror::Error;

use super::features::column_values;

/// Errors raised when a correlation is undefined
#[derive(Error, Debug, PartialEq)]
pub enum CorrelationError {
    #[error("Length mismatch: {0} vs {1} values")]
    LengthMismatch(usize, usize),

    #[error("At least two samples are required, got {0}")]
    TooFewSamples(usize),

    #[error("Correlation is undefined for a constant input")]
    ZeroVariance,
}

/// Compute the Pearson correlation coefficient, covariance divided by the
/// product of standard deviations.
///
/// Uses a single-pass Welford accumulation for numerical stability. The
/// result is clamped to [-1, 1].
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Result<f64, CorrelationError> {
    if x.len() != y.len() {
        return Err(CorrelationError::LengthMismatch(x.len(), y.len()));
    }
    if x.len() < 2 {
        return Err(CorrelationError::TooFewSamples(x.len()));
    }

    let mut count = 0.0;
    let mut mean_x = 0.0;
    let mut mean_y = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    let mut cov_xy = 0.0;

    for (&xi, &yi) in x.iter().zip(y) {
        count += 1.0;
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        mean_x += dx / count;
        mean_y += dy / count;
        var_x += dx * (xi - mean_x);
        var_y += dy * (yi - mean_y);
        cov_xy += dx * (yi - mean_y);
    }

    if var_x == 0.0 || var_y == 0.0 {
        return Err(CorrelationError::ZeroVariance);
    }

    // The 1/n factors cancel between covariance and standard deviations
    let r = cov_xy / (var_x.sqrt() * var_y.sqrt());
    Ok(r.clamp(-1.0, 1.0))
}

/// Pearson correlation between two columns of a DataFrame
pub fn column_correlation(df: &DataFrame, column_x: &str, column_y: &str) -> Result<f64> {
    let x = column_values(df, column_x)?;
    let y = column_values(df, column_y)?;
    let r = pearson_correlation(&x, &y)?;
    log::debug!("pearson({}, {}) = {}", column_x, column_y, r);
    Ok(r)
}
