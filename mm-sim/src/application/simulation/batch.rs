//! Batch Runner
//!
//! Repeats the path simulator over consecutive seeds and summarizes each
//! path. Paths share no mutable state and each owns its generator, so they
//! run on the rayon pool; results come back in path order regardless.

use super::runner::PathSimulator;
use crate::application::quoting::QuotingModel;
use crate::domain::PathSummary;
use mm_core::{QuotingConfig, SimResult, SimulationConfig};
use rayon::prelude::*;
use tracing::info;

/// Runs many independent paths of one simulator
#[derive(Debug, Clone)]
pub struct BatchRunner<Q = crate::application::quoting::AvellanedaStoikov> {
    simulator: PathSimulator<Q>,
}

impl<Q: QuotingModel> BatchRunner<Q> {
    pub fn new(simulator: PathSimulator<Q>) -> Self {
        Self { simulator }
    }

    pub fn simulator(&self) -> &PathSimulator<Q> {
        &self.simulator
    }

    /// Seed used for path `index`
    #[inline]
    pub fn path_seed(base_seed: u64, index: usize) -> u64 {
        base_seed.wrapping_add(index as u64)
    }

    /// Simulate `n_paths` paths with seeds `base_seed + j`
    ///
    /// `base_seed` defaults to the simulation config's seed.
    pub fn run(&self, n_paths: usize, seed_override: Option<u64>) -> SimResult<Vec<PathSummary>> {
        let base_seed = seed_override.unwrap_or(self.simulator.simulation_config().random_seed);

        info!(n_paths, base_seed, "Running batch");

        let summaries: Vec<PathSummary> = (0..n_paths)
            .into_par_iter()
            .map(|j| {
                let path = self.simulator.run_with_seed(Self::path_seed(base_seed, j))?;
                Ok(PathSummary::from_path(j, &path))
            })
            .collect::<SimResult<Vec<_>>>()?;

        info!(n_paths = summaries.len(), "Batch complete");
        Ok(summaries)
    }
}

/// Simulate `n_paths` Avellaneda-Stoikov paths and summarize each
pub fn simulate_many(
    sim: &SimulationConfig,
    quoting: &QuotingConfig,
    n_paths: usize,
    seed_override: Option<u64>,
) -> SimResult<Vec<PathSummary>> {
    BatchRunner::new(PathSimulator::new(*sim, *quoting)?).run(n_paths, seed_override)
}
