//! Plot layer: figure description and the interactive window.
//!
//! ```text
//!   Analysis (xs, ys, fits)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  chart    │  scatter + curve series, colours, legend
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  window   │  eframe / egui_plot, blocks until closed
//!   └──────────┘
//! ```

pub mod chart;
pub mod window;

pub use chart::ChartSpec;
pub use window::show_chart;
