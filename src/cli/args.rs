//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::pipeline::{is_numeric_feature, numeric_features};

/// Highest polynomial degree accepted on the command line
pub const MAX_DEGREE: usize = 6;

/// cellfit - Fit a line and a polynomial between two cell-nucleus features
#[derive(Parser, Debug)]
#[command(name = "cellfit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Data file path (headerless, 35 comma-separated columns)
    #[arg(value_name = "INPUT")]
    pub input_positional: Option<PathBuf>,

    /// Data file path, alternative to the positional argument
    #[arg(short, long, conflicts_with = "input_positional")]
    pub input: Option<PathBuf>,

    /// Regressor column (x axis)
    #[arg(short = 'x', long, default_value = "mean_perimeter", value_parser = validate_feature)]
    pub x_column: String,

    /// Response column (y axis)
    #[arg(short = 'y', long, default_value = "mean_area", value_parser = validate_feature)]
    pub y_column: String,

    /// Column the rows are ordered by before fitting.
    /// Defaults to the regressor column.
    #[arg(long, value_parser = validate_feature)]
    pub sort_by: Option<String>,

    /// Degree of the polynomial fit
    #[arg(long, default_value = "2", value_parser = validate_degree)]
    pub degree: usize,

    /// Number of rows shown in the dataset previews
    #[arg(long, default_value = "5")]
    pub preview_rows: usize,

    /// Skip the interactive chart window
    #[arg(long, default_value = "false")]
    pub no_plot: bool,

    /// Write the fit results as JSON to this path
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl Cli {
    /// Input path, falling back to `wpbc.data` in the working directory
    pub fn input_path(&self) -> PathBuf {
        self.input
            .clone()
            .or_else(|| self.input_positional.clone())
            .unwrap_or_else(|| PathBuf::from("wpbc.data"))
    }

    /// Sort key, defaulting to the regressor column
    pub fn sort_column(&self) -> &str {
        self.sort_by.as_deref().unwrap_or(&self.x_column)
    }
}

/// Validator for column arguments
fn validate_feature(s: &str) -> Result<String, String> {
    if is_numeric_feature(s) {
        Ok(s.to_string())
    } else {
        Err(format!(
            "'{}' is not a numeric column. Available: {}",
            s,
            numeric_features().join(", ")
        ))
    }
}

/// Validator for degree parameter
fn validate_degree(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid integer", s))?;

    if !(1..=MAX_DEGREE).contains(&value) {
        Err(format!(
            "degree must be between 1 and {}, got {}",
            MAX_DEGREE, value
        ))
    } else {
        Ok(value)
    }
}
