//! Trade Record Value Objects

mod direction;
mod outcome;

pub use direction::TradeDirection;
pub use outcome::{TradeOutcome, TradeResult};
