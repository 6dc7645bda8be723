//! Stable reordering of dataset rows by one numeric feature

use anyhow::{Context, Result};
use polars::prelude::*;

const ROW_POSITION: &str = "__row_position";

/// Sort rows ascending by `column`, keeping the input order of equal keys.
///
/// Only the row order changes. Unknown values sort last.
pub fn sort_by_feature(df: &DataFrame, column: &str) -> Result<DataFrame> {
    ensure_numeric(df, column)?;

    let options = SortMultipleOptions::default()
        .with_order_descending(false)
        .with_nulls_last(true)
        .with_maintain_order(true);

    df.sort([column], options)
        .with_context(|| format!("Failed to sort dataset by '{}'", column))
}

/// Sort like [`sort_by_feature`], also returning each row's position in `df`
pub fn sort_with_positions(df: &DataFrame, column: &str) -> Result<(DataFrame, Vec<IdxSize>)> {
    let indexed = df.with_row_index(ROW_POSITION.into(), None)?;
    let sorted = sort_by_feature(&indexed, column)?;
    let positions = sorted
        .column(ROW_POSITION)?
        .idx()?
        .into_no_null_iter()
        .collect();
    Ok((sorted.drop(ROW_POSITION)?, positions))
}

/// Check whether the rows are already in ascending order of `column`
pub fn is_sorted_by(df: &DataFrame, column: &str) -> Result<bool> {
    ensure_numeric(df, column)?;

    let values = df.column(column)?.cast(&DataType::Float64)?;
    let values = values.f64()?;

    let mut previous: Option<f64> = None;
    let mut seen_null = false;
    for value in values.iter() {
        match value {
            Some(v) => {
                if seen_null {
                    return Ok(false);
                }
                if previous.is_some_and(|p| v < p) {
                    return Ok(false);
                }
                previous = Some(v);
            }
            None => seen_null = true,
        }
    }

    Ok(true)
}

fn ensure_numeric(df: &DataFrame, column: &str) -> Result<()> {
    let col = df
        .column(column)
        .with_context(|| format!("Sort column '{}' not found", column))?;
    if !col.dtype().is_primitive_numeric() {
        anyhow::bail!(
            "Sort column '{}' is not numeric (found {})",
            column,
            col.dtype()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_ascending() {
        let df = df! {
            "key" => [3.0f64, 1.0, 2.0],
            "tag" => ["c", "a", "b"],
        }
        .unwrap();

        let sorted = sort_by_feature(&df, "key").unwrap();
        let tags: Vec<&str> = sorted.column("tag").unwrap().str().unwrap().into_no_null_iter().collect();
        assert_eq!(tags, vec!["a", "b", "c"]);
        assert!(is_sorted_by(&sorted, "key").unwrap());
        assert!(!is_sorted_by(&df, "key").unwrap());
    }

    #[test]
    fn test_sort_rejects_text_column() {
        let df = df! { "outcome" => ["R", "N"] }.unwrap();
        assert!(sort_by_feature(&df, "outcome").is_err());
    }

    #[test]
    fn test_sort_rejects_unknown_column() {
        let df = df! { "a" => [1.0f64] }.unwrap();
        assert!(sort_by_feature(&df, "b").is_err());
    }
}
