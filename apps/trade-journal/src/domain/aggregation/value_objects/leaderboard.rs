//! Leaderboard Value Objects

use serde::{Deserialize, Serialize};

use crate::domain::aggregation::value_objects::PerformanceStats;
use crate::domain::shared::{InstrumentSymbol, TraderName};

/// One row of the trader leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraderStats {
    /// 1-based position by win rate.
    pub rank: usize,
    /// Trader name.
    pub trader: TraderName,
    /// The trader's statistics.
    #[serde(flatten)]
    pub stats: PerformanceStats,
}

/// One row of the instrument breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentStats {
    /// 1-based position by win rate.
    pub rank: usize,
    /// Instrument symbol.
    pub instrument: InstrumentSymbol,
    /// The instrument's statistics.
    #[serde(flatten)]
    pub stats: PerformanceStats,
}

/// Overall journal summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    /// Statistics over every trade.
    #[serde(flatten)]
    pub stats: PerformanceStats,
    /// Distinct traders.
    pub trader_count: usize,
    /// Distinct instruments.
    pub instrument_count: usize,
}
