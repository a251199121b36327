//! Error Types

use thiserror::Error;

/// Errors raised by the simulation core
///
/// Numerically awkward states (crossed quotes, negative mids, inventory at a
/// clip boundary) are resolved by policy and never show up here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// A parameter is outside its admissible range
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },
}

impl SimError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        SimError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Name of the offending parameter
    pub fn parameter(&self) -> &'static str {
        match self {
            SimError::InvalidParameter { name, .. } => name,
        }
    }
}

pub type SimResult<T> = std::result::Result<T, SimError>;

/// Require `value > 0` and finite
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> SimResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::invalid(name, format!("must be > 0, got {value}")))
    }
}

/// Require `value >= 0` and finite
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> SimResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SimError::invalid(name, format!("must be >= 0, got {value}")))
    }
}
