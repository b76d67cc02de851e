//! Aggregation Value Objects

mod filter;
mod leaderboard;
mod matrix;
mod performance_stats;
mod period;

pub use filter::TradeFilter;
pub use leaderboard::{InstrumentStats, PerformanceSummary, TraderStats};
pub use matrix::WinRateMatrix;
pub use performance_stats::PerformanceStats;
pub use period::{PeriodGrouping, PeriodStats};
