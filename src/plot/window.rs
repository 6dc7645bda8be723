use anyhow::Result;
use eframe::egui::{self, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use super::chart::ChartSpec;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ChartApp {
    pub chart: ChartSpec,
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            fit_plot(ui, &self.chart);
        });
    }
}

/// Render the scatter and both fitted curves
fn fit_plot(ui: &mut Ui, chart: &ChartSpec) {
    Plot::new("fit_plot")
        .legend(Legend::default())
        .x_axis_label(chart.x_label.as_str())
        .y_axis_label(chart.y_label.as_str())
        .show_grid(chart.show_grid)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let scatter: PlotPoints = chart.scatter.points.iter().copied().collect();
            plot_ui.points(
                Points::new(scatter)
                    .name(&chart.scatter.name)
                    .color(chart.scatter.color)
                    .radius(chart.marker_radius),
            );

            for curve in &chart.curves {
                let points: PlotPoints = curve.points.iter().copied().collect();
                plot_ui.line(
                    Line::new(points)
                        .name(&curve.name)
                        .color(curve.color)
                        .width(2.0),
                );
            }
        });
}

/// Open the chart in a native window and block until it is closed
pub fn show_chart(chart: ChartSpec) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(chart.size)
            .with_min_inner_size([400.0, 400.0]),
        ..Default::default()
    };

    let title = chart.title.clone();
    log::debug!("opening chart window '{}'", title);

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(ChartApp { chart }))),
    )
    .map_err(|e| anyhow::anyhow!("Chart window failed: {}", e))
}
