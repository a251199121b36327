//! Shared kernel for the market-making simulator
//!
//! Pure value objects and arithmetic used by the simulation engine:
//! - **tick**: tick-grid rounding and spread enforcement
//! - **params**: run configuration (mid-price process, quoting model, regimes)
//! - **quote**: per-step quoting input and two-sided output
//! - **error**: the `InvalidParameter` taxonomy
//! - **stats**: sample statistics for path summaries

pub mod error;
pub mod params;
pub mod quote;
pub mod stats;
pub mod tick;

// Re-export at crate root for convenience
pub use error::{SimError, SimResult};
pub use params::{QuotingConfig, Regime, SimulationConfig};
pub use quote::{Quote, QuoteState};
pub use tick::{
    GRID_TOLERANCE, ceil_to_tick, enforce_spread, floor_to_tick, is_on_grid, round_to_tick,
    spread_in_ticks,
};
