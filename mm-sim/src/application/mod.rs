//! Application layer: quoting, fills and simulation orchestration
//!
//! Contains:
//! - **quoting**: Avellaneda-Stoikov quote generation
//! - **fills**: exponential-intensity Poisson fill model
//! - **simulation**: path simulator, batch runner and regime sweep

pub mod fills;
pub mod quoting;
pub mod simulation;
