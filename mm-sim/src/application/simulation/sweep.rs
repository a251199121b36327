//! Regime Sweep
//!
//! Runs a batch per market regime and reduces each batch to the mean and
//! sample standard deviation of every summary metric.

use super::batch::simulate_many;
use crate::domain::{PathSummary, SUMMARY_METRICS};
use mm_core::stats::{mean, sample_std};
use mm_core::{QuotingConfig, Regime, SimResult, SimulationConfig};
use serde::Serialize;
use tracing::info;

const N_METRICS: usize = SUMMARY_METRICS.len();

/// Aggregated batch statistics for one regime
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepRow {
    pub regime: String,
    pub sigma: f64,
    pub lambda0: f64,
    pub n_paths: usize,
    /// Per-metric means, in `SUMMARY_METRICS` order
    pub means: [f64; N_METRICS],
    /// Per-metric sample std, in `SUMMARY_METRICS` order (0 below two paths)
    pub stds: [f64; N_METRICS],
}

impl SweepRow {
    pub fn from_summaries(regime: &Regime, summaries: &[PathSummary]) -> Self {
        let mut means = [0.0; N_METRICS];
        let mut stds = [0.0; N_METRICS];

        for m in 0..N_METRICS {
            let column: Vec<f64> = summaries.iter().map(|s| s.metrics()[m]).collect();
            means[m] = mean(&column).unwrap_or(0.0);
            stds[m] = sample_std(&column).unwrap_or(0.0);
        }

        Self {
            regime: regime.name.clone(),
            sigma: regime.sigma,
            lambda0: regime.lambda0,
            n_paths: summaries.len(),
            means,
            stds,
        }
    }

    /// Header: regime, sigma, lambda0, n_paths, every `<metric>_mean`, then every `<metric>_std`
    pub fn columns() -> Vec<String> {
        let mut columns: Vec<String> = ["regime", "sigma", "lambda0", "n_paths"]
            .iter()
            .map(|c| c.to_string())
            .collect();
        columns.extend(SUMMARY_METRICS.iter().map(|m| format!("{m}_mean")));
        columns.extend(SUMMARY_METRICS.iter().map(|m| format!("{m}_std")));
        columns
    }

    pub fn to_record(&self) -> Vec<String> {
        let mut record = vec![
            self.regime.clone(),
            self.sigma.to_string(),
            self.lambda0.to_string(),
            self.n_paths.to_string(),
        ];
        record.extend(self.means.iter().map(f64::to_string));
        record.extend(self.stds.iter().map(f64::to_string));
        record
    }

    /// Mean of a named metric
    pub fn mean_of(&self, metric: &str) -> Option<f64> {
        SUMMARY_METRICS
            .iter()
            .position(|m| *m == metric)
            .map(|i| self.means[i])
    }

    /// Sample std of a named metric
    pub fn std_of(&self, metric: &str) -> Option<f64> {
        SUMMARY_METRICS
            .iter()
            .position(|m| *m == metric)
            .map(|i| self.stds[i])
    }
}

/// Batch-simulate every regime on top of the base configs
///
/// Rows come back sorted by (sigma, lambda0).
pub fn sweep(
    sim: &SimulationConfig,
    quoting: &QuotingConfig,
    regimes: &[Regime],
    n_paths: usize,
) -> SimResult<Vec<SweepRow>> {
    let mut rows = Vec::with_capacity(regimes.len());

    for regime in regimes {
        let (sim_r, quoting_r) = regime.apply(sim, quoting);
        let summaries = simulate_many(&sim_r, &quoting_r, n_paths, None)?;
        let row = SweepRow::from_summaries(regime, &summaries);

        info!(
            regime = %regime.name,
            pnl_final_mean = row.means[0],
            "Regime complete"
        );
        rows.push(row);
    }

    rows.sort_by(|a, b| {
        a.sigma
            .total_cmp(&b.sigma)
            .then(a.lambda0.total_cmp(&b.lambda0))
    });
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_columns_layout() {
        let columns = SweepRow::columns();

        assert_eq!(columns.len(), 4 + 2 * N_METRICS);
        assert_eq!(columns[..4], ["regime", "sigma", "lambda0", "n_paths"]);
        assert_eq!(columns[4], "pnl_final_mean");
        assert_eq!(columns[4 + N_METRICS], "pnl_final_std");
        assert!(!columns.iter().any(|c| c.starts_with("path")));
    }

    #[test]
    fn test_sweep_one_row_per_regime() {
        let sim = SimulationConfig::new(100.0, 0.02, 2.0, 0.1, 1).unwrap();
        let regimes = Regime::grid(&[0.04, 0.01], &[1.0, 2.0]);
        let rows = sweep(&sim, &QuotingConfig::default(), &regimes, 5).unwrap();

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].sigma, 0.01);
        assert_eq!(rows[3].sigma, 0.04);
        assert!(rows.iter().all(|r| r.n_paths == 5));
        assert_eq!(rows[0].to_record().len(), SweepRow::columns().len());
        assert_eq!(rows[0].to_record()[0], "sigma=0.01/lambda0=1");
    }

    #[test]
    fn test_aggregates_match_batch() {
        let sim = SimulationConfig::new(100.0, 0.02, 2.0, 0.1, 1).unwrap();
        let quote = QuotingConfig::default();
        let regime = Regime::new("base", 0.02, 1.0);

        let summaries = simulate_many(&sim, &quote, 6, None).unwrap();
        let row = SweepRow::from_summaries(&regime, &summaries);

        let pnls: Vec<f64> = summaries.iter().map(|s| s.pnl_final).collect();
        assert_relative_eq!(row.mean_of("pnl_final").unwrap(), mean(&pnls).unwrap());
        assert_relative_eq!(row.std_of("pnl_final").unwrap(), sample_std(&pnls).unwrap());
        assert_eq!(row.mean_of("path"), None);
    }
}
