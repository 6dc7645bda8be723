//! cellfit: Regression Library
//!
//! Loads the WPBC cell-nucleus dataset, orders it by one feature, fits a
//! line and a polynomial between two features and reports their Pearson
//! correlation.

pub mod cli;
pub mod pipeline;
pub mod plot;
pub mod report;
pub mod utils;
