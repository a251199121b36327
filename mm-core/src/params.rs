//! Simulation Parameters
//!
//! Immutable value objects describing one simulation run: the mid-price
//! process ([`SimulationConfig`]) and the quoting/execution model
//! ([`QuotingConfig`]). Constructors validate ranges; values built through
//! serde or struct literals can be checked with `validate()`.

use crate::error::{SimError, SimResult, ensure_non_negative, ensure_positive};
use serde::{Deserialize, Serialize};

/// Mid-price process and run-level settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Mid price at t = 0
    pub initial_mid_price: f64,
    /// Volatility per sqrt(time unit) of the arithmetic random walk
    pub volatility: f64,
    /// Session length T
    pub horizon: f64,
    /// Step length dt
    pub time_step: f64,
    /// Seed for the path's pseudorandom generator
    pub random_seed: u64,
    /// Flat fee charged per fill (cash units)
    pub fee_per_fill: f64,
    /// Absolute inventory cap (unbounded when None)
    pub max_position: Option<u32>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_mid_price: 100.0,
            volatility: 0.02,
            horizon: 600.0,
            time_step: 0.1,
            random_seed: 7,
            fee_per_fill: 0.0,
            max_position: None,
        }
    }
}

impl SimulationConfig {
    /// Create a validated config with no fees and no position cap
    pub fn new(
        initial_mid_price: f64,
        volatility: f64,
        horizon: f64,
        time_step: f64,
        random_seed: u64,
    ) -> SimResult<Self> {
        let config = Self {
            initial_mid_price,
            volatility,
            horizon,
            time_step,
            random_seed,
            fee_per_fill: 0.0,
            max_position: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check every field against its admissible range
    pub fn validate(&self) -> SimResult<()> {
        ensure_positive("initial_mid_price", self.initial_mid_price)?;
        ensure_positive("volatility", self.volatility)?;
        ensure_positive("horizon", self.horizon)?;
        self.validate_time_step()?;
        ensure_non_negative("fee_per_fill", self.fee_per_fill)?;
        Ok(())
    }

    /// The one check the path simulator enforces itself
    pub fn validate_time_step(&self) -> SimResult<()> {
        ensure_positive("time_step", self.time_step)
    }

    /// Number of steps N = floor(horizon / time_step)
    pub fn num_steps(&self) -> usize {
        let n = (self.horizon / self.time_step).floor();
        if n.is_finite() && n > 0.0 { n as usize } else { 0 }
    }

    /// Set fee per fill (builder pattern)
    pub fn with_fee_per_fill(mut self, fee: f64) -> Self {
        self.fee_per_fill = fee;
        self
    }

    /// Set position cap (builder pattern)
    pub fn with_max_position(mut self, max: u32) -> Self {
        self.max_position = Some(max);
        self
    }

    /// Set seed (builder pattern)
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = seed;
        self
    }

    /// Set volatility (builder pattern)
    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }
}

/// Quoting policy and fill model parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotingConfig {
    /// Risk aversion gamma
    pub risk_aversion: f64,
    /// Order-book depth parameter k (intensity decay per unit distance)
    pub market_depth: f64,
    /// Arrival intensity lambda0 at zero distance from mid
    pub base_arrival_intensity: f64,
    /// Exchange tick size
    pub tick_size: f64,
    /// Narrowest allowed spread in ticks
    pub min_spread_ticks: u32,
    /// Widest allowed spread in ticks (unbounded when None)
    pub max_spread_ticks: Option<u32>,
    /// Bound on the inventory fed into the reservation price
    pub inventory_clip: Option<u32>,
}

impl Default for QuotingConfig {
    fn default() -> Self {
        Self {
            risk_aversion: 0.1,
            market_depth: 1.5,
            base_arrival_intensity: 1.0,
            tick_size: 0.01,
            min_spread_ticks: 1,
            max_spread_ticks: None,
            inventory_clip: None,
        }
    }
}

impl QuotingConfig {
    /// Create a validated config with a one-tick minimum spread and no clipping
    pub fn new(
        risk_aversion: f64,
        market_depth: f64,
        base_arrival_intensity: f64,
        tick_size: f64,
    ) -> SimResult<Self> {
        let config = Self {
            risk_aversion,
            market_depth,
            base_arrival_intensity,
            tick_size,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SimResult<()> {
        self.validate_model()?;
        ensure_non_negative("base_arrival_intensity", self.base_arrival_intensity)?;
        ensure_positive("tick_size", self.tick_size)?;
        if self.min_spread_ticks < 1 {
            return Err(SimError::invalid("min_spread_ticks", "must be >= 1"));
        }
        if let Some(max) = self.max_spread_ticks {
            if max < self.min_spread_ticks {
                return Err(SimError::invalid(
                    "max_spread_ticks",
                    format!(
                        "must be >= min_spread_ticks ({}), got {max}",
                        self.min_spread_ticks
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Preconditions of the Avellaneda-Stoikov formula (gamma > 0, k > 0)
    pub fn validate_model(&self) -> SimResult<()> {
        ensure_positive("risk_aversion", self.risk_aversion)?;
        ensure_positive("market_depth", self.market_depth)
    }

    /// Set minimum spread (builder pattern)
    pub fn with_min_spread_ticks(mut self, ticks: u32) -> Self {
        self.min_spread_ticks = ticks;
        self
    }

    /// Set maximum spread (builder pattern)
    pub fn with_max_spread_ticks(mut self, ticks: u32) -> Self {
        self.max_spread_ticks = Some(ticks);
        self
    }

    /// Set inventory clip (builder pattern)
    pub fn with_inventory_clip(mut self, clip: u32) -> Self {
        self.inventory_clip = Some(clip);
        self
    }

    /// Set lambda0 (builder pattern)
    pub fn with_base_arrival_intensity(mut self, lambda0: f64) -> Self {
        self.base_arrival_intensity = lambda0;
        self
    }
}

/// A named (volatility, arrival intensity) market regime for sweeps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Regime {
    pub name: String,
    pub sigma: f64,
    pub lambda0: f64,
}

impl Regime {
    pub fn new(name: impl Into<String>, sigma: f64, lambda0: f64) -> Self {
        Self {
            name: name.into(),
            sigma,
            lambda0,
        }
    }

    /// Cartesian product of sigmas and lambda0s, sorted by (sigma, lambda0)
    pub fn grid(sigmas: &[f64], lambda0s: &[f64]) -> Vec<Regime> {
        let mut regimes: Vec<Regime> = sigmas
            .iter()
            .flat_map(|&sigma| {
                lambda0s.iter().map(move |&lambda0| {
                    Regime::new(format!("sigma={sigma}/lambda0={lambda0}"), sigma, lambda0)
                })
            })
            .collect();
        regimes.sort_by(|a, b| {
            a.sigma
                .total_cmp(&b.sigma)
                .then(a.lambda0.total_cmp(&b.lambda0))
        });
        regimes
    }

    /// Apply this regime on top of base configs
    pub fn apply(
        &self,
        sim: &SimulationConfig,
        quote: &QuotingConfig,
    ) -> (SimulationConfig, QuotingConfig) {
        (
            sim.with_volatility(self.sigma),
            quote.with_base_arrival_intensity(self.lambda0),
        )
    }
}
