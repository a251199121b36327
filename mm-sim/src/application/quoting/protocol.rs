//! Quoting Model Protocol
//!
//! Core trait for quote generation used by the path simulator.

use mm_core::{Quote, QuoteState, SimResult};

/// Quoting model interface
///
/// Implementations turn the current step's state into a tradable two-sided
/// quote: `bid < ask`, both on the tick grid. Implementations must be pure;
/// batches share one model across rayon workers.
pub trait QuotingModel: Send + Sync {
    /// Compute quotes for the given state
    fn compute_quotes(&self, state: &QuoteState) -> SimResult<Quote>;

    /// Get the model name for logging/debugging
    fn name(&self) -> &str;
}
