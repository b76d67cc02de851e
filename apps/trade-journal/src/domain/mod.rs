//! Domain Layer
//!
//! Pure business logic of the trade journal. No I/O, no async.
//!
//! # Bounded Contexts
//!
//! - [`trade_record`]: the `Trade` aggregate and its settlement state machine
//! - [`metrics`]: risk, reward and R:R arithmetic
//! - [`settlement`]: target/stop evaluation against observed prices
//! - [`aggregation`]: leaderboards and journal analytics
//! - [`shared`]: value objects used across contexts

pub mod aggregation;
pub mod metrics;
pub mod settlement;
pub mod shared;
pub mod trade_record;
