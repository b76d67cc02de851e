//! Trade Record Bounded Context
//!
//! The journal's central entity: a trade setup (entry, stop-loss, target)
//! together with its cached risk metrics and its settlement state.

pub mod aggregate;
pub mod errors;
pub mod value_objects;

pub use aggregate::{Trade, TradeSetup};
pub use errors::TradeError;
pub use value_objects::{TradeDirection, TradeOutcome, TradeResult};
