//! Ordinary least squares and polynomial curve fitting
//!
//! `LinearRegression` solves the least-squares problem on a design matrix
//! `[1 | X]` with a QR decomposition. `CurveFit` is the one-dimensional view
//! used by the pipeline: one feature mapped to another by a line or a
//! polynomial.

use faer::prelude::*;
use faer::{Mat, MatRef};
use serde::Serialize;
use thiserror::Error;

use super::features::{reshape_column, FeatureError, PolynomialFeatures};

/// Errors that can occur while fitting or predicting
#[derive(Error, Debug, PartialEq)]
pub enum RegressionError {
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("Need at least {required} samples to fit {required} parameters, got {got}")]
    InsufficientSamples { required: usize, got: usize },

    #[error("Design matrix is degenerate: {0}")]
    Degenerate(String),

    #[error(transparent)]
    Feature(#[from] FeatureError),
}

/// Linear model `y = intercept + X · coefficients`
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegression {
    /// One coefficient per design column
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    /// Coefficient of determination on the training data
    pub r_squared: f64,
}

impl LinearRegression {
    /// Fit by minimizing the sum of squared residuals
    pub fn fit(x: MatRef<'_, f64>, y: &[f64]) -> Result<Self, RegressionError> {
        let (n, p) = (x.nrows(), x.ncols());
        if n != y.len() {
            return Err(RegressionError::DimensionMismatch {
                expected: n,
                got: y.len(),
            });
        }
        if n < p + 1 {
            return Err(RegressionError::InsufficientSamples {
                required: p + 1,
                got: n,
            });
        }
        for j in 0..p {
            let first = x[(0, j)];
            if (1..n).all(|i| x[(i, j)] == first) {
                return Err(RegressionError::Degenerate(format!(
                    "column {} is constant",
                    j
                )));
            }
        }

        let design = Mat::from_fn(n, p + 1, |i, j| if j == 0 { 1.0 } else { x[(i, j - 1)] });
        let rhs = Mat::from_fn(n, 1, |i, _| y[i]);

        let beta = design.qr().solve_lstsq(rhs.as_ref());
        let beta: Vec<f64> = (0..=p).map(|j| beta[(j, 0)]).collect();

        if beta.iter().any(|b| !b.is_finite()) {
            return Err(RegressionError::Degenerate(
                "least-squares solution is not finite".to_string(),
            ));
        }

        let mut model = Self {
            intercept: beta[0],
            coefficients: beta[1..].to_vec(),
            r_squared: 0.0,
        };
        let predictions = model.predict(x)?;
        model.r_squared = r_squared(y, &predictions);

        log::debug!(
            "fitted {} samples: intercept={}, coefficients={:?}, r2={}",
            n,
            model.intercept,
            model.coefficients,
            model.r_squared
        );

        Ok(model)
    }

    /// Predict one value per row of `x`
    pub fn predict(&self, x: MatRef<'_, f64>) -> Result<Vec<f64>, RegressionError> {
        if x.ncols() != self.coefficients.len() {
            return Err(RegressionError::DimensionMismatch {
                expected: self.coefficients.len(),
                got: x.ncols(),
            });
        }
        Ok((0..x.nrows())
            .map(|i| {
                self.coefficients
                    .iter()
                    .enumerate()
                    .fold(self.intercept, |acc, (j, c)| acc + c * x[(i, j)])
            })
            .collect())
    }
}

/// R² = 1 - SS_res / SS_tot. A constant target scores 1.0 only when matched exactly.
pub fn r_squared(y_true: &[f64], y_pred: &[f64]) -> f64 {
    let n = y_true.len() as f64;
    let mean = y_true.iter().sum::<f64>() / n;
    let ss_tot: f64 = y_true.iter().map(|&y| (y - mean).powi(2)).sum();
    let ss_res: f64 = y_true
        .iter()
        .zip(y_pred)
        .map(|(&y, &p)| (y - p).powi(2))
        .sum();

    if ss_tot == 0.0 {
        if ss_res == 0.0 {
            1.0
        } else {
            0.0
        }
    } else {
        1.0 - ss_res / ss_tot
    }
}

/// Shape of a fitted curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CurveKind {
    Linear,
    Polynomial { degree: usize },
}

/// A fitted curve mapping one feature onto another
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveFit {
    #[serde(flatten)]
    pub kind: CurveKind,
    /// Coefficients in ascending power order, `[c0, c1, c2, …]`
    pub coefficients: Vec<f64>,
    pub r_squared: f64,
    pub equation: String,
}

impl CurveFit {
    /// Fit `y = a·x + b`
    pub fn linear(x: &[f64], y: &[f64]) -> Result<Self, RegressionError> {
        let design = reshape_column(x, y.len())?;
        let model = LinearRegression::fit(design.as_ref(), y)?;
        Ok(Self::from_model(CurveKind::Linear, &model))
    }

    /// Fit `y = c0 + c1·x + … + c_d·x^d` through the expanded basis `[x, …, x^d]`.
    ///
    /// A basis with a constant column is rejected as `Degenerate` rather than
    /// solved for a minimum-norm fit. This happens when every `x` has the same
    /// magnitude, e.g. `±1`, where all even powers equal the intercept column.
    pub fn polynomial(x: &[f64], y: &[f64], degree: usize) -> Result<Self, RegressionError> {
        let column = reshape_column(x, y.len())?;
        let expanded = PolynomialFeatures::new(degree)?.transform(column.as_ref())?;
        let model = LinearRegression::fit(expanded.as_ref(), y)?;
        Ok(Self::from_model(CurveKind::Polynomial { degree }, &model))
    }

    fn from_model(kind: CurveKind, model: &LinearRegression) -> Self {
        let mut coefficients = Vec::with_capacity(model.coefficients.len() + 1);
        coefficients.push(model.intercept);
        coefficients.extend_from_slice(&model.coefficients);
        let equation = format_equation(&coefficients);
        Self {
            kind,
            coefficients,
            r_squared: model.r_squared,
            equation,
        }
    }

    pub fn intercept(&self) -> f64 {
        self.coefficients[0]
    }

    /// Coefficient of the linear term
    pub fn slope(&self) -> f64 {
        self.coefficients.get(1).copied().unwrap_or(0.0)
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn predict_one(&self, x: f64) -> f64 {
        self.coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
    }

    pub fn predict(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.predict_one(x)).collect()
    }

    /// Human readable label, e.g. `Linear Regression: y = 2.000x + 1.000`
    pub fn label(&self) -> String {
        match self.kind {
            CurveKind::Linear => format!("Linear Regression: {}", self.equation),
            CurveKind::Polynomial { .. } => format!("Polynomial Regression: {}", self.equation),
        }
    }
}

/// Render ascending-power coefficients as `y = a·x^n … + c`, three decimals
pub fn format_equation(coefficients: &[f64]) -> String {
    let mut out = String::from("y =");
    let mut first = true;

    for (power, &raw) in coefficients.iter().enumerate().rev() {
        // Values that round to zero print without a sign
        let value = if raw.abs() < 5e-4 { 0.0 } else { raw };
        let term = format!("{:.3}{}", value.abs(), power_suffix(power));

        if first {
            let sign = if value < 0.0 { "-" } else { "" };
            out.push_str(&format!(" {}{}", sign, term));
            first = false;
        } else if value < 0.0 {
            out.push_str(&format!(" - {}", term));
        } else {
            out.push_str(&format!(" + {}", term));
        }
    }

    out
}

fn power_suffix(power: usize) -> String {
    match power {
        0 => String::new(),
        1 => "x".to_string(),
        2 => "x²".to_string(),
        3 => "x³".to_string(),
        4 => "x⁴".to_string(),
        5 => "x⁵".to_string(),
        6 => "x⁶".to_string(),
        p => format!("x^{}", p),
    }
}
