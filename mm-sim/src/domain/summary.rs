//! Path Summary
//!
//! Scalar aggregates of a single [`PathResult`], one row per simulated path.

use super::path::PathResult;
use mm_core::stats::{diff, mean, sample_std};
use serde::{Deserialize, Serialize};

/// Column order of a summary table
pub const SUMMARY_COLUMNS: [&str; 10] = [
    "path",
    "pnl_final",
    "pnl_mean_step",
    "pnl_std_step",
    "max_abs_inventory",
    "fills_total",
    "fills_bid",
    "fills_ask",
    "spread_mean",
    "sharpe_step",
];

/// Summary metrics aggregated by sweeps (every column except `path`)
pub const SUMMARY_METRICS: [&str; 9] = [
    "pnl_final",
    "pnl_mean_step",
    "pnl_std_step",
    "max_abs_inventory",
    "fills_total",
    "fills_bid",
    "fills_ask",
    "spread_mean",
    "sharpe_step",
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathSummary {
    /// Path index within its batch
    pub path: usize,
    /// pnl at the terminal row
    pub pnl_final: f64,
    /// Mean of per-step pnl changes
    pub pnl_mean_step: f64,
    /// Sample std (n - 1) of per-step pnl changes
    pub pnl_std_step: f64,
    pub max_abs_inventory: i64,
    pub fills_total: u64,
    pub fills_bid: u64,
    pub fills_ask: u64,
    /// Mean quoted spread over all rows
    pub spread_mean: f64,
    /// pnl_mean_step / pnl_std_step, 0 when the std is 0
    pub sharpe_step: f64,
}

impl PathSummary {
    pub fn from_path(path: usize, result: &PathResult) -> Self {
        let returns = diff(&result.pnls());
        let pnl_mean_step = mean(&returns).unwrap_or(0.0);
        let pnl_std_step = sample_std(&returns).unwrap_or(0.0);
        let fills_bid = result.bid_fills();
        let fills_ask = result.ask_fills();

        let sharpe_step = if pnl_std_step > 0.0 {
            pnl_mean_step / pnl_std_step
        } else {
            0.0
        };

        Self {
            path,
            pnl_final: result.final_pnl(),
            pnl_mean_step,
            pnl_std_step,
            max_abs_inventory: result.max_abs_inventory(),
            fills_total: fills_bid + fills_ask,
            fills_bid,
            fills_ask,
            spread_mean: mean(&result.spreads()).unwrap_or(0.0),
            sharpe_step,
        }
    }

    /// Values in [`SUMMARY_METRICS`] order
    pub fn metrics(&self) -> [f64; 9] {
        [
            self.pnl_final,
            self.pnl_mean_step,
            self.pnl_std_step,
            self.max_abs_inventory as f64,
            self.fills_total as f64,
            self.fills_bid as f64,
            self.fills_ask as f64,
            self.spread_mean,
            self.sharpe_step,
        ]
    }

    /// Fields in [`SUMMARY_COLUMNS`] order
    pub fn to_record(&self) -> [String; 10] {
        [
            self.path.to_string(),
            self.pnl_final.to_string(),
            self.pnl_mean_step.to_string(),
            self.pnl_std_step.to_string(),
            self.max_abs_inventory.to_string(),
            self.fills_total.to_string(),
            self.fills_bid.to_string(),
            self.fills_ask.to_string(),
            self.spread_mean.to_string(),
            self.sharpe_step.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::path::PathRow;
    use approx::assert_relative_eq;

    fn path_with_pnls(pnls: &[f64]) -> PathResult {
        let rows = pnls
            .iter()
            .enumerate()
            .map(|(i, &pnl)| PathRow {
                time: i as f64,
                mid: 100.0,
                bid: 99.9,
                ask: 100.1,
                inventory: if i % 2 == 0 { 0 } else { -3 },
                cash: pnl,
                pnl,
                fill_bid: i == 1,
                fill_ask: i == 1 || i == 2,
            })
            .collect();
        PathResult::new(0, rows)
    }

    #[test]
    fn test_summary_metrics() {
        let summary = PathSummary::from_path(4, &path_with_pnls(&[0.0, 1.0, 3.0, 2.0]));

        assert_eq!(summary.path, 4);
        assert_relative_eq!(summary.pnl_final, 2.0);
        // returns: [1, 2, -1]
        assert_relative_eq!(summary.pnl_mean_step, 2.0 / 3.0);
        let expected_std = ((1.0f64 / 9.0 + 16.0 / 9.0 + 25.0 / 9.0) / 2.0).sqrt();
        assert_relative_eq!(summary.pnl_std_step, expected_std);
        assert_relative_eq!(summary.sharpe_step, (2.0 / 3.0) / expected_std);
        assert_eq!(summary.max_abs_inventory, 3);
        assert_eq!(summary.fills_bid, 1);
        assert_eq!(summary.fills_ask, 2);
        assert_eq!(summary.fills_total, 3);
        assert_relative_eq!(summary.spread_mean, 0.2, epsilon = 1e-9);
    }

    #[test]
    fn test_flat_pnl_has_zero_sharpe() {
        let summary = PathSummary::from_path(0, &path_with_pnls(&[5.0, 5.0, 5.0]));

        assert_eq!(summary.pnl_std_step, 0.0);
        assert_eq!(summary.sharpe_step, 0.0);
    }

    #[test]
    fn test_single_row_path() {
        let summary = PathSummary::from_path(0, &path_with_pnls(&[1.5]));

        assert_eq!(summary.pnl_mean_step, 0.0);
        assert_eq!(summary.pnl_std_step, 0.0);
        assert_relative_eq!(summary.pnl_final, 1.5);
    }

    #[test]
    fn test_record_layout() {
        let summary = PathSummary::from_path(7, &path_with_pnls(&[0.0, 1.0]));
        let record = summary.to_record();

        assert_eq!(record.len(), SUMMARY_COLUMNS.len());
        assert_eq!(record[0], "7");
        assert_eq!(summary.metrics().len(), SUMMARY_METRICS.len());
    }
}
