//! Leaderboard Use Case

use serde::Serialize;
use std::sync::Arc;

use crate::application::errors::ApplicationError;
use crate::application::ports::TradeStorePort;
use crate::domain::aggregation::{
    InstrumentStats, PerformanceSummary, TradeFilter, TraderStats, aggregate_by_instrument,
    aggregate_by_trader, summarize,
};
use crate::domain::shared::TraderName;

/// Everything the reporting surface shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeaderboardReport {
    /// Traders ranked by win rate.
    pub traders: Vec<TraderStats>,
    /// Instruments ranked by win rate.
    pub instruments: Vec<InstrumentStats>,
    /// Journal-wide summary.
    pub summary: PerformanceSummary,
}

/// Use case for computing leaderboards from the stored journal.
pub struct LeaderboardUseCase<S>
where
    S: TradeStorePort,
{
    store: Arc<S>,
}

impl<S> LeaderboardUseCase<S>
where
    S: TradeStorePort,
{
    /// Create a new `LeaderboardUseCase`.
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Compute the report over the trades matching `filter`.
    ///
    /// The instrument breakdown is restricted to `trader` when given.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Store` if the store cannot be read.
    pub async fn execute(
        &self,
        filter: &TradeFilter,
        trader: Option<&TraderName>,
    ) -> Result<LeaderboardReport, ApplicationError> {
        let trades = filter.apply(&self.store.list().await?);

        Ok(LeaderboardReport {
            traders: aggregate_by_trader(&trades),
            instruments: aggregate_by_instrument(&trades, trader),
            summary: summarize(&trades),
        })
    }
}
