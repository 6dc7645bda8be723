//! Fit summary report generation

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::{Analysis, CurveFit};

/// Summary of both fits and the correlation for one column pair
#[derive(Debug)]
pub struct FitSummary<'a> {
    pub analysis: &'a Analysis,
}

impl<'a> FitSummary<'a> {
    pub fn new(analysis: &'a Analysis) -> Self {
        Self { analysis }
    }

    fn r_squared_color(r2: f64) -> Color {
        if r2 > 0.9 {
            Color::Green
        } else if r2 > 0.5 {
            Color::Yellow
        } else {
            Color::Red
        }
    }

    fn fit_row(name: &str, fit: &CurveFit) -> Vec<Cell> {
        let coefficients = fit
            .coefficients
            .iter()
            .map(|c| format!("{:.6}", c))
            .collect::<Vec<_>>()
            .join(", ");

        vec![
            Cell::new(name),
            Cell::new(&fit.equation),
            Cell::new(coefficients),
            Cell::new(format!("{:.4}", fit.r_squared))
                .fg(Self::r_squared_color(fit.r_squared))
                .add_attribute(Attribute::Bold),
        ]
    }

    /// Build the coefficient table
    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Model").add_attribute(Attribute::Bold),
            Cell::new("Equation").add_attribute(Attribute::Bold),
            Cell::new("Coefficients (c0, c1, …)").add_attribute(Attribute::Bold),
            Cell::new("R²").add_attribute(Attribute::Bold),
        ]);

        table.add_row(Self::fit_row("📈 Linear", &self.analysis.linear));
        table.add_row(Self::fit_row(
            &format!("〰️  Polynomial (degree {})", self.analysis.polynomial.degree()),
            &self.analysis.polynomial,
        ));

        table
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("FIT SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!(
            "      {} ~ {}  ({} samples)",
            style(&self.analysis.y_column).yellow(),
            style(&self.analysis.x_column).yellow(),
            self.analysis.rows()
        );
        println!();

        // Indent the table
        for line in self.table().to_string().lines() {
            println!("    {}", line);
        }

        println!();
        println!(
            "      Pearson r = {}",
            style(format!("{:.6}", self.analysis.correlation)).cyan().bold()
        );
    }
}

/// Shortest round-trip text of the correlation, always with a decimal point
pub fn format_correlation(r: f64) -> String {
    format!("{:?}", r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_correlation_keeps_decimal_point() {
        assert_eq!(format_correlation(1.0), "1.0");
        assert_eq!(format_correlation(-1.0), "-1.0");
        assert_eq!(format_correlation(0.5), "0.5");
        assert_eq!(format_correlation(0.9871234567891234), "0.9871234567891234");
    }

    #[test]
    fn test_table_lists_both_fits() {
        let xs = vec![1.0, 2.0, 3.0, 4.0];
        let ys = vec![3.0, 5.0, 7.0, 9.0];
        let analysis = Analysis {
            x_column: "mean_perimeter".to_string(),
            y_column: "mean_area".to_string(),
            linear: CurveFit::linear(&xs, &ys).unwrap(),
            polynomial: CurveFit::polynomial(&xs, &ys, 2).unwrap(),
            correlation: 1.0,
            xs,
            ys,
        };

        let summary = FitSummary::new(&analysis);
        let table = summary.table();
        assert_eq!(table.row_iter().count(), 2);
        let rendered = table.to_string();
        assert!(rendered.contains("y = 2.000x + 1.000"));
        assert!(rendered.contains("degree 2"));
    }
}
