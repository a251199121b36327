//! Quote Types
//!
//! The per-step input of a quoting policy and its two-sided output.

use crate::tick::{is_on_grid, spread_in_ticks};
use serde::{Deserialize, Serialize};

/// Snapshot handed to a quoting policy at one step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteState {
    /// Current time t
    pub current_time: f64,
    /// Session end T
    pub horizon: f64,
    /// Current mid price
    pub mid_price: f64,
    /// Signed position (positive = long)
    pub inventory: i64,
}

impl QuoteState {
    pub fn new(current_time: f64, horizon: f64, mid_price: f64, inventory: i64) -> Self {
        Self {
            current_time,
            horizon,
            mid_price,
            inventory,
        }
    }

    /// tau = max(0, T - t)
    #[inline]
    pub fn time_remaining(&self) -> f64 {
        (self.horizon - self.current_time).max(0.0)
    }

    /// Inventory bounded to `[-clip, +clip]` when a clip is set
    #[inline]
    pub fn clipped_inventory(&self, clip: Option<u32>) -> i64 {
        match clip {
            Some(c) => {
                let c = i64::from(c);
                self.inventory.clamp(-c, c)
            }
            None => self.inventory,
        }
    }
}

/// Two-sided quote
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub bid: f64,
    pub ask: f64,
}

impl Quote {
    pub fn new(bid: f64, ask: f64) -> Self {
        Self { bid, ask }
    }

    /// ask - bid
    pub fn spread(&self) -> f64 {
        self.ask - self.bid
    }

    /// Spread in whole ticks
    pub fn spread_ticks(&self, tick: f64) -> i64 {
        spread_in_ticks(self.bid, self.ask, tick)
    }

    /// Midpoint of the two sides
    pub fn mid(&self) -> f64 {
        (self.bid + self.ask) / 2.0
    }

    /// Check if quote is crossed or locked (invalid)
    pub fn is_crossed(&self) -> bool {
        self.bid >= self.ask
    }

    /// Both sides sit on the tick grid
    pub fn is_on_grid(&self, tick: f64) -> bool {
        is_on_grid(self.bid, tick) && is_on_grid(self.ask, tick)
    }

    /// Distance of each side from `mid` as (mid - bid, ask - mid)
    pub fn distances_from(&self, mid: f64) -> (f64, f64) {
        (mid - self.bid, self.ask - mid)
    }
}
