//! Path Result
//!
//! The per-step time series produced by one simulated path. Rows are indexed
//! 0..=N and every column is aligned with `time`.

use serde::{Deserialize, Serialize};

/// Column order of a path table
pub const PATH_COLUMNS: [&str; 9] = [
    "time",
    "mid",
    "bid",
    "ask",
    "inventory",
    "cash",
    "pnl",
    "fill_bid",
    "fill_ask",
];

/// One step of a simulated path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathRow {
    /// t = i × dt
    pub time: f64,
    /// Mid price at t
    pub mid: f64,
    /// Bid quoted at t
    pub bid: f64,
    /// Ask quoted at t
    pub ask: f64,
    /// Position held at t, before this step's fills
    pub inventory: i64,
    /// Cash held at t, before this step's fills
    pub cash: f64,
    /// Mark-to-market value: cash + inventory × mid
    pub pnl: f64,
    /// Bid was hit during this step
    pub fill_bid: bool,
    /// Ask was lifted during this step
    pub fill_ask: bool,
}

impl PathRow {
    /// Fields in [`PATH_COLUMNS`] order, flags as 0/1
    pub fn to_record(&self) -> [String; 9] {
        [
            self.time.to_string(),
            self.mid.to_string(),
            self.bid.to_string(),
            self.ask.to_string(),
            self.inventory.to_string(),
            self.cash.to_string(),
            self.pnl.to_string(),
            u8::from(self.fill_bid).to_string(),
            u8::from(self.fill_ask).to_string(),
        ]
    }

    pub fn spread(&self) -> f64 {
        self.ask - self.bid
    }
}

/// Immutable output of one path simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    seed: u64,
    rows: Vec<PathRow>,
}

impl PathResult {
    pub(crate) fn new(seed: u64, rows: Vec<PathRow>) -> Self {
        Self { seed, rows }
    }

    /// Seed the path was generated from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn rows(&self) -> &[PathRow] {
        &self.rows
    }

    /// Number of rows (N + 1)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Terminal row
    pub fn last(&self) -> Option<&PathRow> {
        self.rows.last()
    }

    pub fn final_pnl(&self) -> f64 {
        self.last().map_or(0.0, |r| r.pnl)
    }

    pub fn final_inventory(&self) -> i64 {
        self.last().map_or(0, |r| r.inventory)
    }

    pub fn mids(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.mid).collect()
    }

    pub fn pnls(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.pnl).collect()
    }

    pub fn spreads(&self) -> Vec<f64> {
        self.rows.iter().map(PathRow::spread).collect()
    }

    pub fn bid_fills(&self) -> u64 {
        self.rows.iter().filter(|r| r.fill_bid).count() as u64
    }

    pub fn ask_fills(&self) -> u64 {
        self.rows.iter().filter(|r| r.fill_ask).count() as u64
    }

    pub fn max_abs_inventory(&self) -> i64 {
        self.rows
            .iter()
            .map(|r| r.inventory.abs())
            .max()
            .unwrap_or(0)
    }
}
