//! Domain layer: simulation output value objects

mod path;
mod summary;

pub use path::{PATH_COLUMNS, PathResult, PathRow};
pub use summary::{PathSummary, SUMMARY_COLUMNS, SUMMARY_METRICS};
