//! Quoting Policies
//!
//! - [`QuotingModel`]: the seam the path simulator quotes through
//! - [`AvellanedaStoikov`]: closed-form inventory-skewed quoting

mod avellaneda_stoikov;
mod protocol;

pub use avellaneda_stoikov::{ASConfig, AvellanedaStoikov, avellaneda_stoikov_quotes};
pub use protocol::QuotingModel;
