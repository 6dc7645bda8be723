//! Pipeline module - loading, ordering and fitting steps

pub mod analysis;
pub mod correlation;
pub mod features;
pub mod loader;
pub mod regression;
pub mod schema;
pub mod sorter;

pub use analysis::*;
pub use correlation::*;
pub use features::*;
pub use loader::*;
pub use regression::*;
pub use schema::*;
pub use sorter::*;
