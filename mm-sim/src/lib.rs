//! Monte Carlo simulator of a single Avellaneda-Stoikov market maker
//!
//! The agent quotes a bid and an ask around an arithmetic random-walk mid
//! price. Each side fills as a Poisson event whose intensity decays
//! exponentially with the quote's distance from mid, and the resulting
//! inventory/cash/pnl time series is recorded step by step.
//!
//! # Layout
//!
//! - [`domain`]: path rows, path results and per-path summaries
//! - [`application`]: quoting model, fill model, path simulator, batch runner, sweep
//! - [`infrastructure`]: JSON run configuration and CSV export
//!
//! # Example
//!
//! ```no_run
//! use mm_sim::{QuotingConfig, SimulationConfig, simulate_path};
//!
//! let sim = SimulationConfig::new(100.0, 0.02, 60.0, 0.1, 7)?;
//! let path = simulate_path(&sim, &QuotingConfig::default())?;
//! println!("final pnl {:.4}", path.final_pnl());
//! # Ok::<(), mm_sim::SimError>(())
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export key types at crate root
pub use application::fills::{ExponentialFillModel, arrival_intensity, fill_probability};
pub use application::quoting::{
    ASConfig, AvellanedaStoikov, QuotingModel, avellaneda_stoikov_quotes,
};
pub use application::simulation::{
    BatchRunner, PathSimulator, SweepRow, simulate_many, simulate_path, sweep,
};
pub use domain::{PATH_COLUMNS, PathResult, PathRow, PathSummary, SUMMARY_COLUMNS};
pub use infrastructure::{ConfigError, ExportError, RunConfig};
pub use mm_core::{
    Quote, QuoteState, QuotingConfig, Regime, SimError, SimResult, SimulationConfig,
    enforce_spread,
};
