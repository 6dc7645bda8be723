//! cellfit: Regression CLI Tool
//!
//! Loads the WPBC cell-nucleus dataset, fits a line and a polynomial
//! between two features, plots both fits and prints the Pearson
//! correlation of the two features.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;

use cellfit::cli::Cli;
use cellfit::pipeline::{analyze, is_sorted_by, load_dataset_with_progress, sort_with_positions};
use cellfit::plot::{show_chart, ChartSpec};
use cellfit::report::{
    export_fit_report, format_correlation, print_preview, FitReport, FitSummary,
};
use cellfit::utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_config,
    print_info, print_step_header, print_step_time, print_success,
};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let input = cli.input_path();
    let sort_by = cli.sort_column().to_string();

    // Print styled banner
    print_banner(env!("CARGO_PKG_VERSION"));

    // Print configuration card
    print_config(&input, &cli.x_column, &cli.y_column, &sort_by, cli.degree);

    // Step 1: Load dataset
    print_step_header(1, "Load Dataset");

    let step_start = Instant::now();
    let (df, rows, cols) = load_dataset_with_progress(&input)?;

    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Rows: {}", rows);
    println!("      Columns: {}", cols);
    print_preview(&df, cli.preview_rows, "Loaded records", None)?;
    print_step_time(step_start.elapsed());

    // Step 2: Order rows by the sort key
    print_step_header(2, "Sort Records");

    let step_start = Instant::now();
    let (df, positions) = sort_with_positions(&df, &sort_by)?;
    log::debug!("sorted by {}: {}", sort_by, is_sorted_by(&df, &sort_by)?);
    print_success(&format!("Sorted by {}", sort_by));
    print_preview(&df, cli.preview_rows, "Sorted records", Some(positions.as_slice()))?;
    print_step_time(step_start.elapsed());

    // Step 3: Fit both curves and correlate
    print_step_header(3, "Fit Regressions");

    let step_start = Instant::now();
    let spinner = create_spinner("Fitting linear and polynomial models...");
    let analysis = match analyze(&df, &cli.x_column, &cli.y_column, cli.degree) {
        Ok(analysis) => analysis,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e);
        }
    };
    finish_with_success(&spinner, "Models fitted");
    FitSummary::new(&analysis).display();

    if let Some(path) = &cli.export {
        let report = FitReport::new(&analysis, &input, &sort_by);
        export_fit_report(&report, path)?;
        print_success(&format!("Fit report written to {}", path.display()));
    }
    print_step_time(step_start.elapsed());

    // Step 4: Chart window
    print_step_header(4, "Plot");

    if cli.no_plot {
        print_info("Chart window skipped (--no-plot)");
    } else {
        print_info("Close the chart window to finish");
        show_chart(ChartSpec::from_analysis(&analysis))?;
    }

    print_completion();

    // Pearson correlation between the two columns
    println!("{}", format_correlation(analysis.correlation));

    Ok(())
}
