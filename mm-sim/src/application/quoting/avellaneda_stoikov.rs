//! Avellaneda-Stoikov Optimal Market Making
//!
//! From Avellaneda & Stoikov (2008):
//!
//! **Reservation Price** (where you'd be indifferent to trading):
//! r = mid − q × γ × σ² × τ
//!
//! Where:
//! - γ = risk aversion parameter
//! - q = current inventory (positive = long), optionally clipped
//! - σ = volatility per √time unit
//! - τ = time remaining, max(0, T − t)
//!
//! **Optimal Half-Spread**:
//! h = ½ × γ × σ² × τ + (1/γ) × ln(1 + γ/k)
//!
//! Components:
//! - Inventory-risk term (½γσ²τ): shrinks as the session runs out
//! - Market-depth term: compensation for adverse selection, independent of τ and q
//!
//! Raw quotes r ± h are snapped outward onto the tick grid and then passed
//! through the spread policy in [`mm_core::enforce_spread`].

use super::protocol::QuotingModel;
use mm_core::{
    Quote, QuoteState, QuotingConfig, SimError, SimResult, SimulationConfig, ceil_to_tick,
    enforce_spread, floor_to_tick,
};

/// Avellaneda-Stoikov configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ASConfig {
    /// Risk aversion parameter γ
    /// Higher = wider quotes, stronger inventory skew
    pub gamma: f64,
    /// Volatility σ of the mid-price process
    pub sigma: f64,
    /// Market depth parameter k
    pub k: f64,
    /// Tick size for the output grid
    pub tick_size: f64,
    /// Minimum spread in ticks
    pub min_spread_ticks: u32,
    /// Maximum spread in ticks
    pub max_spread_ticks: Option<u32>,
    /// Bound on the inventory used for skew
    pub inventory_clip: Option<u32>,
}

impl Default for ASConfig {
    fn default() -> Self {
        Self::from_configs(&SimulationConfig::default(), &QuotingConfig::default())
    }
}

impl ASConfig {
    /// Assemble model parameters from the run configs
    pub fn from_configs(sim: &SimulationConfig, quote: &QuotingConfig) -> Self {
        Self {
            gamma: quote.risk_aversion,
            sigma: sim.volatility,
            k: quote.market_depth,
            tick_size: quote.tick_size,
            min_spread_ticks: quote.min_spread_ticks,
            max_spread_ticks: quote.max_spread_ticks,
            inventory_clip: quote.inventory_clip,
        }
    }

    fn check_preconditions(&self) -> SimResult<()> {
        if !(self.gamma > 0.0) {
            return Err(SimError::invalid(
                "risk_aversion",
                format!("gamma must be > 0, got {}", self.gamma),
            ));
        }
        if !(self.k > 0.0) {
            return Err(SimError::invalid(
                "market_depth",
                format!("k must be > 0, got {}", self.k),
            ));
        }
        Ok(())
    }
}

/// Avellaneda-Stoikov optimal market making model
#[derive(Debug, Clone)]
pub struct AvellanedaStoikov {
    config: ASConfig,
}

impl AvellanedaStoikov {
    /// Create a model, rejecting γ <= 0 or k <= 0
    pub fn new(config: ASConfig) -> SimResult<Self> {
        config.check_preconditions()?;
        Ok(Self { config })
    }

    pub fn from_configs(sim: &SimulationConfig, quote: &QuotingConfig) -> SimResult<Self> {
        Self::new(ASConfig::from_configs(sim, quote))
    }

    pub fn config(&self) -> &ASConfig {
        &self.config
    }

    /// Calculate reservation price
    ///
    /// r = mid - q × γ × σ² × τ
    pub fn reservation_price(&self, state: &QuoteState) -> f64 {
        let c = &self.config;
        let q = state.clipped_inventory(c.inventory_clip) as f64;
        state.mid_price - q * c.gamma * c.sigma.powi(2) * state.time_remaining()
    }

    /// Calculate optimal half-spread
    ///
    /// h = ½γσ²τ + (1/γ)ln(1 + γ/k)
    pub fn optimal_half_spread(&self, tau: f64) -> f64 {
        let c = &self.config;
        0.5 * c.gamma * c.sigma.powi(2) * tau + (1.0 / c.gamma) * (1.0 + c.gamma / c.k).ln()
    }

    /// Theoretical quote before any tick rounding
    pub fn raw_quotes(&self, state: &QuoteState) -> Quote {
        let r = self.reservation_price(state);
        let h = self.optimal_half_spread(state.time_remaining());
        Quote::new(r - h, r + h)
    }
}

impl QuotingModel for AvellanedaStoikov {
    fn compute_quotes(&self, state: &QuoteState) -> SimResult<Quote> {
        avellaneda_stoikov_quotes(state, &self.config)
    }

    fn name(&self) -> &str {
        "avellaneda_stoikov"
    }
}

/// Tradable Avellaneda-Stoikov quotes for one state.
///
/// Fails with `InvalidParameter` when γ <= 0 or k <= 0; never fails otherwise.
pub fn avellaneda_stoikov_quotes(state: &QuoteState, config: &ASConfig) -> SimResult<Quote> {
    config.check_preconditions()?;
    let raw = AvellanedaStoikov { config: *config }.raw_quotes(state);

    let tick = config.tick_size;
    let bid = floor_to_tick(raw.bid, tick);
    let ask = ceil_to_tick(raw.ask, tick);

    let (bid, ask) = enforce_spread(
        bid,
        ask,
        state.mid_price,
        tick,
        config.min_spread_ticks,
        config.max_spread_ticks,
    );
    Ok(Quote::new(bid, ask))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn model() -> AvellanedaStoikov {
        AvellanedaStoikov::new(ASConfig::default()).unwrap()
    }

    fn state(inventory: i64) -> QuoteState {
        QuoteState::new(0.0, 100.0, 100.0, inventory)
    }

    #[test]
    fn test_quotes_valid_and_on_grid() {
        let quote = model().compute_quotes(&state(0)).unwrap();

        assert!(quote.bid < quote.ask);
        assert!(quote.is_on_grid(0.01));
    }

    #[test]
    fn test_symmetric_when_flat() {
        let m = model();
        assert_relative_eq!(m.reservation_price(&state(0)), 100.0);

        let raw = m.raw_quotes(&state(0));
        assert_relative_eq!(raw.mid(), 100.0, epsilon = 1e-12);
    }

    #[test]
    fn test_half_spread_formula() {
        let m = model();
        // 0.5 * 0.1 * 0.0004 * 100 + 10 * ln(1 + 0.1 / 1.5)
        let expected = 0.002 + 10.0 * (1.0f64 + 0.1 / 1.5).ln();
        assert_relative_eq!(m.optimal_half_spread(100.0), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_skew_when_long() {
        let m = model();
        let flat = m.compute_quotes(&state(0)).unwrap();
        let long = m.compute_quotes(&state(10)).unwrap();

        assert!(m.reservation_price(&state(10)) < 100.0);
        assert!(long.bid <= flat.bid);
        assert!(long.ask <= flat.ask);
    }

    #[test]
    fn test_skew_when_short() {
        let m = model();
        let flat = m.compute_quotes(&state(0)).unwrap();
        let short = m.compute_quotes(&state(-10)).unwrap();

        assert!(short.bid >= flat.bid);
        assert!(short.ask >= flat.ask);
    }

    #[test]
    fn test_inventory_clip_limits_skew() {
        let clipped = AvellanedaStoikov::new(ASConfig {
            inventory_clip: Some(2),
            ..ASConfig::default()
        })
        .unwrap();

        assert_relative_eq!(
            clipped.reservation_price(&state(50)),
            clipped.reservation_price(&state(2))
        );
    }

    #[test]
    fn test_no_skew_past_horizon() {
        let m = model();
        let late = QuoteState::new(150.0, 100.0, 100.0, 25);

        assert_relative_eq!(m.reservation_price(&late), 100.0);
        let expected = 10.0 * (1.0f64 + 0.1 / 1.5).ln();
        assert_relative_eq!(m.optimal_half_spread(late.time_remaining()), expected);
    }

    #[test]
    fn test_wider_spread_with_more_time() {
        let m = AvellanedaStoikov::new(ASConfig {
            sigma: 2.0,
            ..ASConfig::default()
        })
        .unwrap();

        let early = m.compute_quotes(&QuoteState::new(0.0, 100.0, 100.0, 0)).unwrap();
        let late = m.compute_quotes(&QuoteState::new(99.0, 100.0, 100.0, 0)).unwrap();

        assert!(early.spread() > late.spread());
    }

    #[test]
    fn test_max_spread_caps_width() {
        let m = AvellanedaStoikov::new(ASConfig {
            max_spread_ticks: Some(10),
            ..ASConfig::default()
        })
        .unwrap();

        let quote = m.compute_quotes(&state(0)).unwrap();
        assert!(quote.spread_ticks(0.01) <= 11);
        assert!(!quote.is_crossed());
    }

    #[test]
    fn test_rejects_non_positive_gamma_and_k() {
        let bad_gamma = ASConfig {
            gamma: 0.0,
            ..ASConfig::default()
        };
        let err = avellaneda_stoikov_quotes(&state(0), &bad_gamma).unwrap_err();
        assert_eq!(err.parameter(), "risk_aversion");
        assert!(AvellanedaStoikov::new(bad_gamma).is_err());

        let bad_k = ASConfig {
            k: -1.5,
            ..ASConfig::default()
        };
        let err = avellaneda_stoikov_quotes(&state(0), &bad_k).unwrap_err();
        assert_eq!(err.parameter(), "market_depth");
    }

    #[test]
    fn test_negative_mid_is_quoted() {
        let quote = model()
            .compute_quotes(&QuoteState::new(0.0, 100.0, -3.0, 4))
            .unwrap();
        assert!(quote.bid < quote.ask);
    }
}
