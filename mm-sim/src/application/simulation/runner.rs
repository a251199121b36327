//! Path Simulator
//!
//! Drives one market-making path: an arithmetic random-walk mid price, a
//! quote every step, independent Poisson fills on each side, and the
//! resulting inventory/cash/pnl time series.
//!
//! # Randomness
//!
//! Every draw comes from one `Pcg64` seeded with the path seed, in a fixed
//! order:
//! 1. N standard normals for the mid-price increments, all up front
//! 2. per step, one uniform for the bid then one uniform for the ask
//!
//! Both uniforms are drawn every step, even when the position cap vetoes a
//! fill, so identical configs and seeds give bit-identical paths.

use crate::application::fills::ExponentialFillModel;
use crate::application::quoting::{AvellanedaStoikov, QuotingModel};
use crate::domain::{PathResult, PathRow};
use mm_core::{Quote, QuoteState, QuotingConfig, SimResult, SimulationConfig};
use rand::distributions::Standard;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rand_pcg::Pcg64;
use tracing::debug;

/// Inventory and cash carried between steps
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Book {
    inventory: i64,
    cash: f64,
}

/// The path simulator couples a quoting model with the fill model
#[derive(Debug, Clone)]
pub struct PathSimulator<Q = AvellanedaStoikov> {
    sim: SimulationConfig,
    quoting: QuotingConfig,
    model: Q,
    fill_model: ExponentialFillModel,
}

impl PathSimulator {
    /// Create a simulator quoting with Avellaneda-Stoikov
    ///
    /// Fails with `InvalidParameter` for time_step <= 0, gamma <= 0 or k <= 0.
    pub fn new(sim: SimulationConfig, quoting: QuotingConfig) -> SimResult<Self> {
        sim.validate_time_step()?;
        let model = AvellanedaStoikov::from_configs(&sim, &quoting)?;
        Self::with_model(sim, quoting, model)
    }
}

impl<Q: QuotingModel> PathSimulator<Q> {
    /// Create a simulator around any quoting model
    pub fn with_model(sim: SimulationConfig, quoting: QuotingConfig, model: Q) -> SimResult<Self> {
        sim.validate_time_step()?;
        Ok(Self {
            fill_model: ExponentialFillModel::new(
                quoting.base_arrival_intensity,
                quoting.market_depth,
            ),
            sim,
            quoting,
            model,
        })
    }

    pub fn simulation_config(&self) -> &SimulationConfig {
        &self.sim
    }

    pub fn quoting_config(&self) -> &QuotingConfig {
        &self.quoting
    }

    pub fn model(&self) -> &Q {
        &self.model
    }

    /// Run one path with the configured seed
    pub fn run(&self) -> SimResult<PathResult> {
        self.run_with_seed(self.sim.random_seed)
    }

    /// Run one path with an explicit seed
    pub fn run_with_seed(&self, seed: u64) -> SimResult<PathResult> {
        let n = self.sim.num_steps();
        let dt = self.sim.time_step;
        let fee = self.sim.fee_per_fill;

        debug!(
            seed,
            steps = n,
            model = self.model.name(),
            "Starting path simulation"
        );

        let mut rng = Pcg64::seed_from_u64(seed);
        let mids = self.mid_path(&mut rng, n);

        let mut rows = Vec::with_capacity(n + 1);
        let mut book = Book::default();
        let mut last_quote: Option<Quote> = None;

        for (i, &mid) in mids.iter().take(n).enumerate() {
            let time = i as f64 * dt;
            let quote = self.quote_at(time, mid, book.inventory)?;
            let probs = self.fill_model.probabilities(&quote, mid, dt);

            // Bid draw strictly before ask draw
            let u_bid: f64 = rng.sample(Standard);
            let u_ask: f64 = rng.sample(Standard);

            let mut next = book;

            let fill_bid = u_bid < probs.bid && self.can_buy(next.inventory);
            if fill_bid {
                next.inventory += 1;
                next.cash -= quote.bid;
                next.cash -= fee;
            }

            // Both sides may fill in the same step; the ask cap sees the post-bid position
            let fill_ask = u_ask < probs.ask && self.can_sell(next.inventory);
            if fill_ask {
                next.inventory -= 1;
                next.cash += quote.ask;
                next.cash -= fee;
            }

            rows.push(Self::row(time, mid, quote, book, fill_bid, fill_ask));
            book = next;
            last_quote = Some(quote);
        }

        // No new quote at the terminal time; a zero-step path quotes once at t = 0
        let terminal_quote = match last_quote {
            Some(quote) => quote,
            None => self.quote_at(0.0, mids[n], book.inventory)?,
        };
        rows.push(Self::row(
            n as f64 * dt,
            mids[n],
            terminal_quote,
            book,
            false,
            false,
        ));

        let result = PathResult::new(seed, rows);

        debug!(
            seed,
            final_pnl = result.final_pnl(),
            final_inventory = result.final_inventory(),
            fills_bid = result.bid_fills(),
            fills_ask = result.ask_fills(),
            "Path simulation complete"
        );

        Ok(result)
    }

    /// Mid-price path of length n + 1
    ///
    /// mid[0] = S0, mid[i] = S0 + σ × Σ_{j<i} √dt × z_j. Arithmetic, so the
    /// price may go negative.
    fn mid_path(&self, rng: &mut Pcg64, n: usize) -> Vec<f64> {
        let s0 = self.sim.initial_mid_price;
        let sigma = self.sim.volatility;
        let scale = self.sim.time_step.sqrt();

        let mut mids = Vec::with_capacity(n + 1);
        mids.push(s0);

        let mut cumulative = 0.0;
        for _ in 0..n {
            let z: f64 = rng.sample(StandardNormal);
            cumulative += z * scale;
            mids.push(s0 + sigma * cumulative);
        }
        mids
    }

    fn quote_at(&self, time: f64, mid: f64, inventory: i64) -> SimResult<Quote> {
        let state = QuoteState::new(time, self.sim.horizon, mid, inventory);
        self.model.compute_quotes(&state)
    }

    #[inline]
    fn can_buy(&self, inventory: i64) -> bool {
        self.sim
            .max_position
            .is_none_or(|max| inventory + 1 <= i64::from(max))
    }

    #[inline]
    fn can_sell(&self, inventory: i64) -> bool {
        self.sim
            .max_position
            .is_none_or(|max| inventory - 1 >= -i64::from(max))
    }

    fn row(
        time: f64,
        mid: f64,
        quote: Quote,
        book: Book,
        fill_bid: bool,
        fill_ask: bool,
    ) -> PathRow {
        PathRow {
            time,
            mid,
            bid: quote.bid,
            ask: quote.ask,
            inventory: book.inventory,
            cash: book.cash,
            pnl: book.cash + book.inventory as f64 * mid,
            fill_bid,
            fill_ask,
        }
    }
}

/// Simulate one path with Avellaneda-Stoikov quoting
pub fn simulate_path(sim: &SimulationConfig, quoting: &QuotingConfig) -> SimResult<PathResult> {
    PathSimulator::new(*sim, *quoting)?.run()
}
