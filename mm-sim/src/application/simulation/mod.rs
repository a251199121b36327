//! Simulation Framework
//!
//! - [`PathSimulator`]: one seeded path, strictly sequential in time
//! - [`BatchRunner`]: many independent paths, parallel across seeds
//! - [`sweep`]: one batch per market regime

mod batch;
mod runner;
mod sweep;

pub use batch::{BatchRunner, simulate_many};
pub use runner::{PathSimulator, simulate_path};
pub use sweep::{SweepRow, sweep};
