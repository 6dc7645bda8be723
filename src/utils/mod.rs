//! Console output helpers - spinners and styled messages

pub mod progress;
pub mod styling;

pub use progress::*;
pub use styling::*;
