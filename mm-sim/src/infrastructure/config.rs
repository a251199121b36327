//! Configuration loading
//!
//! A run is described by one JSON document with two optional sections:
//!
//! ```json
//! {
//!   "simulation": { "initial_mid_price": 100.0, "horizon": 600.0, "time_step": 0.1 },
//!   "quoting": { "risk_aversion": 0.1, "market_depth": 1.5, "tick_size": 0.01 }
//! }
//! ```
//!
//! Missing fields take their defaults.

use mm_core::{QuotingConfig, SimError, SimulationConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Root configuration for a simulation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Mid-price process, seed, fees and position cap
    pub simulation: SimulationConfig,

    /// Quoting model and fill model parameters
    pub quoting: QuotingConfig,
}

impl RunConfig {
    pub fn new(simulation: SimulationConfig, quoting: QuotingConfig) -> Self {
        Self {
            simulation,
            quoting,
        }
    }

    /// Load and validate configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.simulation.validate()?;
        self.quoting.validate()?;
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error(transparent)]
    Invalid(#[from] SimError),
}
