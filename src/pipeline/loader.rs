//! Dataset loader for the headerless, fixed-layout WPBC text file

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::*;
use thiserror::Error;

use super::schema::{column_dtype, is_nullable, COLUMN_NAMES, EXPECTED_COLUMNS, NULL_TOKEN};
use crate::utils::{create_spinner, finish_with_success};

/// Reasons a data file is rejected
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Dataset file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Dataset contains no records")]
    Empty,

    #[error("Expected {expected} columns per record, found {found}")]
    ColumnCount { expected: usize, found: usize },

    #[error("Column '{column}' contains values that are not valid {dtype}")]
    Malformed { column: String, dtype: String },

    #[error("Column '{column}' is missing a value in {count} record(s)")]
    MissingField { column: String, count: usize },
}

/// Load the dataset, mapping each of the 35 positions to its schema name.
///
/// `?` is read as an unknown value and is only accepted in
/// `lymph_node_status`. An empty or absent field is always an error, so a
/// record cut short fails even when only its last field is missing.
pub fn load_dataset(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(DatasetError::NotFound(path.to_path_buf()).into());
    }

    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read data file: {}", path.display()))?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(DatasetError::Empty.into());
    }

    // `?` stays a literal token here; nulls after parsing are absent fields
    let raw = LazyCsvReader::new(path)
        .with_has_header(false)
        .with_infer_schema_length(None)
        .finish()
        .with_context(|| format!("Failed to read data file: {}", path.display()))?
        .collect()
        .with_context(|| format!("Failed to parse data file: {}", path.display()))?;

    log::debug!("parsed {} raw rows x {} columns", raw.height(), raw.width());

    if raw.width() != EXPECTED_COLUMNS {
        return Err(DatasetError::ColumnCount {
            expected: EXPECTED_COLUMNS,
            found: raw.width(),
        }
        .into());
    }

    let columns = raw
        .get_columns()
        .iter()
        .zip(COLUMN_NAMES)
        .map(|(col, name)| conform_column(col, name))
        .collect::<Result<Vec<Column>, DatasetError>>()?;

    let df = DataFrame::new(columns).context("Failed to assemble dataset")?;
    Ok(df)
}

/// Load the dataset behind a spinner, returning it with its shape
pub fn load_dataset_with_progress(path: &Path) -> Result<(DataFrame, usize, usize)> {
    let spinner = create_spinner(&format!("Reading {}...", path.display()));
    let df = match load_dataset(path) {
        Ok(df) => df,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e);
        }
    };
    let (rows, cols) = df.shape();
    finish_with_success(&spinner, &format!("Loaded {} records", rows));
    Ok((df, rows, cols))
}

/// Rename a positional column and coerce it to its schema type.
///
/// Absent fields are rejected in every column. `?` tokens become nulls, and
/// are rejected unless the column is nullable.
fn conform_column(col: &Column, name: &str) -> Result<Column, DatasetError> {
    let absent = col.null_count();
    if absent > 0 {
        return Err(DatasetError::MissingField {
            column: name.to_string(),
            count: absent,
        });
    }

    let dtype = column_dtype(name);
    let mut series = col.as_materialized_series().clone();
    series.rename(name.into());
    if let Some(cleaned) = nullify_unknowns(&series, name)? {
        series = cleaned;
    }

    let series = series
        .rechunk()
        .strict_cast(&dtype)
        .map_err(|_| DatasetError::Malformed {
            column: name.to_string(),
            dtype: dtype.to_string(),
        })?;

    Ok(Column::from(series))
}

/// Replace `?` tokens in a text column with nulls
fn nullify_unknowns(series: &Series, name: &str) -> Result<Option<Series>, DatasetError> {
    let Ok(text) = series.str() else {
        return Ok(None);
    };

    let unknown = text
        .into_no_null_iter()
        .filter(|value| *value == NULL_TOKEN)
        .count();
    if unknown == 0 {
        return Ok(None);
    }
    if !is_nullable(name) {
        return Err(DatasetError::MissingField {
            column: name.to_string(),
            count: unknown,
        });
    }

    let cleaned: StringChunked = text
        .into_iter()
        .map(|value| value.filter(|v| *v != NULL_TOKEN))
        .collect();
    Ok(Some(cleaned.with_name(name.into()).into_series()))
}
