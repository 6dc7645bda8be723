//! Unit tests for linear and polynomial fitting

use cellfit::pipeline::{
    reshape_column, CurveFit, CurveKind, FeatureError, LinearRegression, PolynomialFeatures,
    RegressionError,
};

#[path = "common/mod.rs"]
mod common;

use common::*;

#[test]
fn test_linear_fit_recovers_slope_and_intercept() {
    let x: Vec<f64> = (0..30).map(|i| 50.0 + i as f64 * 3.7).collect();
    let y: Vec<f64> = x.iter().map(|v| 2.0 * v + 1.0).collect();

    let fit = CurveFit::linear(&x, &y).unwrap();

    assert_eq!(fit.kind, CurveKind::Linear);
    assert_close(fit.slope(), 2.0, 1e-9);
    assert_close(fit.intercept(), 1.0, 1e-7);
    assert_close(fit.r_squared, 1.0, 1e-12);
}

#[test]
fn test_polynomial_fit_on_line_has_zero_quadratic_term() {
    let x: Vec<f64> = (0..30).map(|i| 50.0 + i as f64 * 3.7).collect();
    let y: Vec<f64> = x.iter().map(|v| 2.0 * v + 1.0).collect();

    let fit = CurveFit::polynomial(&x, &y, 2).unwrap();

    assert_eq!(fit.kind, CurveKind::Polynomial { degree: 2 });
    assert_close(fit.coefficients[2], 0.0, 1e-9);
    assert_close(fit.slope(), 2.0, 1e-6);
}

#[test]
fn test_literal_pairs_fit() {
    let fit = CurveFit::linear(&[1.0, 2.0, 3.0], &[3.0, 5.0, 7.0]).unwrap();

    assert_close(fit.slope(), 2.0, 1e-12);
    assert_close(fit.intercept(), 1.0, 1e-12);
    assert_eq!(fit.equation, "y = 2.000x + 1.000");
}

#[test]
fn test_polynomial_beats_line_on_curved_data() {
    let x: Vec<f64> = (1..=40).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|v| 0.5 * v * v - 4.0 * v + 3.0).collect();

    let linear = CurveFit::linear(&x, &y).unwrap();
    let quadratic = CurveFit::polynomial(&x, &y, 2).unwrap();

    assert!(quadratic.r_squared > linear.r_squared);
    assert_close(quadratic.coefficients[2], 0.5, 1e-9);
    assert_close(quadratic.coefficients[1], -4.0, 1e-7);
    assert_close(quadratic.coefficients[0], 3.0, 1e-6);
}

#[test]
fn test_least_squares_minimizes_residuals() {
    // Points off a line; perturbing the fitted line must not reduce the error
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [1.2, 1.9, 3.2, 3.8, 5.1];
    let fit = CurveFit::linear(&x, &y).unwrap();

    let sse = |slope: f64, intercept: f64| -> f64 {
        x.iter()
            .zip(y.iter())
            .map(|(xi, yi)| (yi - (slope * xi + intercept)).powi(2))
            .sum()
    };
    let best = sse(fit.slope(), fit.intercept());

    for (ds, di) in [(0.01, 0.0), (-0.01, 0.0), (0.0, 0.01), (0.0, -0.01)] {
        assert!(sse(fit.slope() + ds, fit.intercept() + di) > best);
    }
}

#[test]
fn test_multi_column_design() {
    // y = 1 + 2a - 3b
    let rows = [(1.0, 0.0), (0.0, 1.0), (2.0, 1.0), (3.0, 5.0), (4.0, 2.0)];
    let x = faer::Mat::from_fn(rows.len(), 2, |i, j| if j == 0 { rows[i].0 } else { rows[i].1 });
    let y: Vec<f64> = rows.iter().map(|(a, b)| 1.0 + 2.0 * a - 3.0 * b).collect();

    let model = LinearRegression::fit(x.as_ref(), &y).unwrap();

    assert_close(model.intercept, 1.0, 1e-9);
    assert_close(model.coefficients[0], 2.0, 1e-9);
    assert_close(model.coefficients[1], -3.0, 1e-9);

    let predictions = model.predict(x.as_ref()).unwrap();
    for (p, t) in predictions.iter().zip(&y) {
        assert_close(*p, *t, 1e-9);
    }
}

#[test]
fn test_polynomial_with_constant_even_power_is_degenerate() {
    let x = [-1.0, 1.0, -1.0, 1.0, 1.0];
    let y = [0.5, 2.5, 0.4, 2.6, 2.4];

    let linear = CurveFit::linear(&x, &y).unwrap();
    assert_close(linear.slope(), 1.025, 1e-9);

    let err = CurveFit::polynomial(&x, &y, 2).unwrap_err();
    assert!(matches!(err, RegressionError::Degenerate(_)));
}

#[test]
fn test_reshape_requires_exact_row_count() {
    let values = vec![1.0; 197];

    let err = reshape_column(&values, 198).unwrap_err();

    assert_eq!(err, FeatureError::ShapeMismatch { rows: 198, found: 197 });
    assert_eq!(reshape_column(&values, 197).unwrap().nrows(), 197);
}

#[test]
fn test_polynomial_features_expand_columns() {
    let x = reshape_column(&[1.0, 2.0, 3.0], 3).unwrap();

    let expanded = PolynomialFeatures::new(2).unwrap().transform(x.as_ref()).unwrap();

    assert_eq!((expanded.nrows(), expanded.ncols()), (3, 2));
    assert_eq!(expanded[(2, 0)], 3.0);
    assert_eq!(expanded[(2, 1)], 9.0);
}
