//! Dependency Injection Container
//!
//! Wires the store, the oracle and the journal configuration into use cases.

use std::sync::Arc;

use crate::application::ports::{PriceOraclePort, TradeStorePort};
use crate::application::use_cases::{
    CloseTradeUseCase, DeleteTradeUseCase, LeaderboardUseCase, RecordTradeUseCase,
    SettleOpenTradesUseCase,
};
use crate::config::JournalConfig;
use crate::domain::settlement::SettlementConfig;
use crate::domain::shared::{InstrumentSymbol, TraderName};

/// Dependency injection container.
///
/// Holds the wired ports plus the roster every new trade is checked against.
pub struct Container<S, O>
where
    S: TradeStorePort + 'static,
    O: PriceOraclePort + 'static,
{
    store: Arc<S>,
    oracle: Arc<O>,
    traders: Vec<TraderName>,
    instruments: Vec<InstrumentSymbol>,
    settlement: SettlementConfig,
}

impl<S, O> Container<S, O>
where
    S: TradeStorePort + 'static,
    O: PriceOraclePort + 'static,
{
    /// Create a new container from the ports and the journal configuration.
    pub fn new(
        store: Arc<S>,
        oracle: Arc<O>,
        journal: &JournalConfig,
        settlement: SettlementConfig,
    ) -> Self {
        Self {
            store,
            oracle,
            traders: journal.trader_names(),
            instruments: journal.instrument_symbols(),
            settlement,
        }
    }

    /// Get the trade store.
    pub fn store(&self) -> Arc<S> {
        Arc::clone(&self.store)
    }

    /// Get the price oracle.
    pub fn oracle(&self) -> Arc<O> {
        Arc::clone(&self.oracle)
    }

    /// Create a `RecordTradeUseCase` restricted to the configured roster.
    pub fn record_trade_use_case(&self) -> RecordTradeUseCase<S> {
        RecordTradeUseCase::with_roster(
            Arc::clone(&self.store),
            self.traders.clone(),
            self.instruments.clone(),
        )
    }

    /// Create a `SettleOpenTradesUseCase`.
    pub fn settle_open_trades_use_case(&self) -> SettleOpenTradesUseCase<S, O> {
        SettleOpenTradesUseCase::with_config(
            Arc::clone(&self.store),
            Arc::clone(&self.oracle),
            self.settlement,
        )
    }

    /// Create a `CloseTradeUseCase`.
    pub fn close_trade_use_case(&self) -> CloseTradeUseCase<S> {
        CloseTradeUseCase::new(Arc::clone(&self.store))
    }

    /// Create a `DeleteTradeUseCase`.
    pub fn delete_trade_use_case(&self) -> DeleteTradeUseCase<S> {
        DeleteTradeUseCase::new(Arc::clone(&self.store))
    }

    /// Create a `LeaderboardUseCase`.
    pub fn leaderboard_use_case(&self) -> LeaderboardUseCase<S> {
        LeaderboardUseCase::new(Arc::clone(&self.store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::application::use_cases::RecordTradeCommand;
    use crate::domain::settlement::SettlementPriority;
    use crate::domain::shared::TradeId;
    use crate::domain::trade_record::TradeOutcome;
    use crate::infrastructure::persistence::InMemoryTradeStore;
    use crate::infrastructure::price_oracle::StaticPriceOracle;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn container(journal: &JournalConfig) -> Container<InMemoryTradeStore, StaticPriceOracle> {
        Container::new(
            Arc::new(InMemoryTradeStore::new()),
            Arc::new(StaticPriceOracle::new()),
            journal,
            SettlementConfig::stop_first(),
        )
    }

    fn command(trader: &str, instrument: &str) -> RecordTradeCommand {
        RecordTradeCommand {
            date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            trader: trader.to_string(),
            instrument: instrument.to_string(),
            entry: dec!(1.0850),
            stop_loss: dec!(1.0800),
            target: dec!(1.0950),
            outcome: None,
        }
    }

    #[tokio::test]
    async fn record_uses_configured_roster() {
        let container = container(&JournalConfig::default());
        let record = container.record_trade_use_case();

        let trade = record.execute(command(" Max ", "eurusd")).await.unwrap();
        assert_eq!(trade.id(), TradeId::new(1));

        let off_roster = record.execute(command("Otieno", "EURUSD")).await;
        assert!(matches!(off_roster, Err(ApplicationError::UnknownTrader { .. })));

        let unknown_pair = record.execute(command("Max", "XAGUSD")).await;
        assert!(matches!(
            unknown_pair,
            Err(ApplicationError::UnknownInstrument { .. })
        ));

        assert_eq!(container.store().len(), 1);
    }

    #[tokio::test]
    async fn empty_roster_accepts_anyone() {
        let journal = JournalConfig {
            traders: Vec::new(),
            instruments: Vec::new(),
            ..JournalConfig::default()
        };
        let container = container(&journal);

        let trade = container
            .record_trade_use_case()
            .execute(command("Otieno", "XAGUSD"))
            .await
            .unwrap();
        assert_eq!(trade.trader().as_str(), "Otieno");
    }

    #[tokio::test]
    async fn settlement_uses_configured_priority() {
        let container = container(&JournalConfig::default());
        let settle = container.settle_open_trades_use_case();
        assert_eq!(settle.evaluator().priority(), SettlementPriority::StopFirst);

        let record = container.record_trade_use_case();
        let trade = record.execute(command("Wallace", "EURUSD")).await.unwrap();
        container.oracle().set_price("EURUSD", dec!(1.0960));

        let report = settle.execute().await.unwrap();
        assert_eq!(report.settled[0].trade_id, trade.id());
        assert_eq!(report.settled[0].outcome, TradeOutcome::TargetHit);

        let closed = container
            .close_trade_use_case()
            .execute(trade.id())
            .await
            .unwrap();
        assert_eq!(closed.outcome(), TradeOutcome::ManualClose);

        let board = container
            .leaderboard_use_case()
            .execute(&crate::domain::aggregation::TradeFilter::new(), None)
            .await
            .unwrap();
        assert_eq!(board.summary.stats.manual_closes, 1);

        container
            .delete_trade_use_case()
            .execute(trade.id())
            .await
            .unwrap();
        assert!(container.store().is_empty());
    }
}
