//! Aggregation Bounded Context
//!
//! Read-only roll-ups of the trade journal: leaderboards per trader and per
//! instrument, the overall summary, the instrument × trader win-rate matrix
//! and per-period progress series. Everything is recomputed from the trade
//! collection on each call.

pub mod services;
pub mod value_objects;

pub use services::{
    aggregate_by_instrument, aggregate_by_trader, period_series, summarize, win_rate_matrix,
};
pub use value_objects::{
    InstrumentStats, PerformanceStats, PerformanceSummary, PeriodGrouping, PeriodStats,
    TradeFilter, TraderStats, WinRateMatrix,
};
