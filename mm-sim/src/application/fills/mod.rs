//! Fill Simulation
//!
//! Poisson fill model with exponentially decaying arrival intensity.

mod intensity;

pub use intensity::{
    ExponentialFillModel, SideProbabilities, arrival_intensity, fill_probability,
};
