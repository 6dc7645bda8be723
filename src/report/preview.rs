//! Console preview of the first rows of a dataset

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Table};
use console::style;
use polars::prelude::*;

/// Columns shown before the middle of a wide table is collapsed
pub const MAX_PREVIEW_COLUMNS: usize = 10;

const ELLIPSIS: &str = "...";

/// Indices of the columns to show, `None` marking the collapsed gap
fn visible_columns(width: usize, max_columns: usize) -> Vec<Option<usize>> {
    if width <= max_columns {
        return (0..width).map(Some).collect();
    }
    let head = max_columns.div_ceil(2);
    let tail = max_columns / 2;
    (0..head)
        .map(Some)
        .chain(std::iter::once(None))
        .chain((width - tail..width).map(Some))
        .collect()
}

fn format_cell(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => "NaN".to_string(),
        AnyValue::Float64(v) => format_float(*v),
        AnyValue::Float32(v) => format_float(*v as f64),
        other => match other.get_str() {
            Some(s) => s.to_string(),
            None => other.to_string(),
        },
    }
}

fn format_float(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{:.1}", v)
    } else {
        format!("{}", v)
    }
}

/// Build the preview table for the first `rows` rows.
///
/// Rows are labelled with `labels` when given, otherwise with `0..rows`.
pub fn preview_table(
    df: &DataFrame,
    rows: usize,
    max_columns: usize,
    labels: Option<&[IdxSize]>,
) -> Result<Table> {
    let head = df.head(Some(rows));
    let columns = head.get_columns();
    let visible = visible_columns(columns.len(), max_columns);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);

    let mut header = vec![Cell::new("").add_attribute(Attribute::Dim)];
    for slot in &visible {
        header.push(match slot {
            Some(idx) => Cell::new(columns[*idx].name().as_str()).add_attribute(Attribute::Bold),
            None => Cell::new(ELLIPSIS),
        });
    }
    table.set_header(header);

    for row in 0..head.height() {
        let label = labels
            .and_then(|labels| labels.get(row))
            .map_or(row, |&position| position as usize);
        let mut cells = vec![Cell::new(label).add_attribute(Attribute::Dim)];
        for slot in &visible {
            cells.push(match slot {
                Some(idx) => {
                    let value = columns[*idx].get(row)?;
                    Cell::new(format_cell(&value)).set_alignment(CellAlignment::Right)
                }
                None => Cell::new(ELLIPSIS),
            });
        }
        table.add_row(cells);
    }

    Ok(table)
}

/// Print a titled preview followed by a `[rows x columns]` footer
pub fn print_preview(
    df: &DataFrame,
    rows: usize,
    title: &str,
    labels: Option<&[IdxSize]>,
) -> Result<()> {
    let table = preview_table(df, rows, MAX_PREVIEW_COLUMNS, labels)?;

    println!();
    println!("    {} {}", style("▤").cyan(), style(title).white().bold());
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
    println!(
        "    {}",
        style(format!("[{} rows x {} columns]", df.height(), df.width())).dim()
    );

    Ok(())
}
