//! Exponential Order-Arrival Fill Model
//!
//! Market orders reach a resting quote at rate
//! λ(δ) = λ0 × exp(−k × max(0, δ)), where δ is the quote's distance from mid.
//! Over a step of length dt the probability of at least one Poisson arrival
//! is p = 1 − exp(−λ × dt). Each side is filled independently.
//!
//! A quote priced through the mid (δ < 0) is treated as sitting at the mid.

use mm_core::Quote;

/// Arrival intensity for a quote `distance` away from mid
#[inline]
pub fn arrival_intensity(lambda0: f64, k: f64, distance: f64) -> f64 {
    lambda0 * (-k * distance.max(0.0)).exp()
}

/// Probability of at least one arrival within `dt` at intensity `lambda`
#[inline]
pub fn fill_probability(lambda: f64, dt: f64) -> f64 {
    if lambda > 0.0 {
        1.0 - (-lambda * dt).exp()
    } else {
        0.0
    }
}

/// Per-side fill probabilities for one step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideProbabilities {
    pub bid: f64,
    pub ask: f64,
}

/// Fill model parameterised by (λ0, k)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialFillModel {
    pub lambda0: f64,
    pub k: f64,
}

impl ExponentialFillModel {
    pub fn new(lambda0: f64, k: f64) -> Self {
        Self { lambda0, k }
    }

    /// Fill probabilities of both sides of `quote` against `mid` over `dt`
    pub fn probabilities(&self, quote: &Quote, mid: f64, dt: f64) -> SideProbabilities {
        let (distance_bid, distance_ask) = quote.distances_from(mid);
        SideProbabilities {
            bid: fill_probability(arrival_intensity(self.lambda0, self.k, distance_bid), dt),
            ask: fill_probability(arrival_intensity(self.lambda0, self.k, distance_ask), dt),
        }
    }
}
