//! Fit report export functionality

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::{Analysis, CurveFit};

/// Metadata about the analysis run
#[derive(Serialize)]
pub struct RunMetadata {
    /// Timestamp of the run (ISO 8601 format)
    pub timestamp: String,
    /// cellfit version
    pub cellfit_version: String,
    /// Input file path
    pub input_file: String,
    /// Column the rows were ordered by
    pub sorted_by: String,
}

/// Complete fit report with metadata
#[derive(Serialize)]
pub struct FitReport<'a> {
    pub metadata: RunMetadata,
    pub x_column: &'a str,
    pub y_column: &'a str,
    pub samples: usize,
    pub linear: &'a CurveFit,
    pub polynomial: &'a CurveFit,
    pub pearson_r: f64,
}

impl<'a> FitReport<'a> {
    pub fn new(analysis: &'a Analysis, input_file: &Path, sorted_by: &str) -> Self {
        Self {
            metadata: RunMetadata {
                timestamp: Utc::now().to_rfc3339(),
                cellfit_version: env!("CARGO_PKG_VERSION").to_string(),
                input_file: input_file.display().to_string(),
                sorted_by: sorted_by.to_string(),
            },
            x_column: &analysis.x_column,
            y_column: &analysis.y_column,
            samples: analysis.rows(),
            linear: &analysis.linear,
            polynomial: &analysis.polynomial,
            pearson_r: analysis.correlation,
        }
    }
}

/// Write the fit report as pretty-printed JSON
pub fn export_fit_report(report: &FitReport, output_path: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(report).context("Failed to serialize fit report to JSON")?;

    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write fit report to {}", output_path.display()))?;

    Ok(())
}
