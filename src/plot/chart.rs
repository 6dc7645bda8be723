use eframe::egui::Color32;

use crate::pipeline::{Analysis, CurveFit};

// ---------------------------------------------------------------------------
// Styling
// ---------------------------------------------------------------------------

/// Scatter marker area in points², as a matplotlib `s` value
const SCATTER_AREA: f32 = 50.0;
const SCATTER_ALPHA: f32 = 0.6;

/// Logical window size for a 10 x 10 inch figure
pub const FIGURE_SIZE: [f32; 2] = [900.0, 900.0];

pub fn scatter_color() -> Color32 {
    Color32::from_rgba_unmultiplied(0x6f, 0xf4, 0xf4, (SCATTER_ALPHA * 255.0).round() as u8)
}

pub fn linear_color() -> Color32 {
    Color32::from_rgb(0x87, 0x89, 0xc0)
}

pub fn polynomial_color() -> Color32 {
    Color32::from_rgb(0xff, 0x6b, 0x6b)
}

// ---------------------------------------------------------------------------
// Chart description
// ---------------------------------------------------------------------------

/// One named, coloured set of points
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub color: Color32,
    pub points: Vec<[f64; 2]>,
}

/// Everything the chart window draws. Nothing here feeds back into a fit.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub scatter: Series,
    /// Marker radius in pixels
    pub marker_radius: f32,
    pub curves: Vec<Series>,
    pub show_grid: bool,
    pub size: [f32; 2],
}

impl ChartSpec {
    /// Scatter of the raw columns overlaid with both fitted curves
    pub fn build(
        x_label: &str,
        y_label: &str,
        xs: &[f64],
        ys: &[f64],
        linear: &CurveFit,
        polynomial: &CurveFit,
    ) -> Self {
        let scatter = Series {
            name: x_label.to_string(),
            color: scatter_color(),
            points: xs.iter().zip(ys).map(|(&x, &y)| [x, y]).collect(),
        };

        // Curves are drawn left to right regardless of the row order
        let mut grid: Vec<f64> = xs.to_vec();
        grid.sort_by(f64::total_cmp);

        let curves = vec![
            curve_series(linear, &grid, linear_color()),
            curve_series(polynomial, &grid, polynomial_color()),
        ];

        Self {
            title: format!("cellfit: {} vs {}", y_label, x_label),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            scatter,
            marker_radius: SCATTER_AREA.sqrt() / 2.0,
            curves,
            show_grid: true,
            size: FIGURE_SIZE,
        }
    }

    pub fn from_analysis(analysis: &Analysis) -> Self {
        Self::build(
            &analysis.x_column,
            &analysis.y_column,
            &analysis.xs,
            &analysis.ys,
            &analysis.linear,
            &analysis.polynomial,
        )
    }

    /// Legend entries in drawing order
    pub fn legend(&self) -> Vec<&str> {
        std::iter::once(self.scatter.name.as_str())
            .chain(self.curves.iter().map(|c| c.name.as_str()))
            .collect()
    }
}

fn curve_series(fit: &CurveFit, grid: &[f64], color: Color32) -> Series {
    Series {
        name: fit.label(),
        color,
        points: grid.iter().map(|&x| [x, fit.predict_one(x)]).collect(),
    }
}
