//! Settle Open Trades Use Case

use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

use crate::application::errors::ApplicationError;
use crate::application::ports::{PriceOraclePort, TradeStorePort};
use crate::domain::settlement::{SettlementConfig, SettlementEvaluator};
use crate::domain::shared::{InstrumentSymbol, Timestamp, TradeId};
use crate::domain::trade_record::TradeOutcome;

/// A trade settled during a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettledTrade {
    /// The trade id.
    pub trade_id: TradeId,
    /// Its instrument.
    pub instrument: InstrumentSymbol,
    /// Target or stop.
    pub outcome: TradeOutcome,
    /// Observed price that settled it.
    pub price: Decimal,
}

/// Result of one settlement pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettlementReport {
    /// Open trades evaluated against a price.
    pub evaluated: usize,
    /// Trades that settled.
    pub settled: Vec<SettledTrade>,
    /// Instruments with no price this pass.
    pub skipped_instruments: Vec<InstrumentSymbol>,
    /// Trades that hit a level but could not be written back.
    ///
    /// They stay open in the store and are evaluated again next pass.
    pub failed_writes: Vec<TradeId>,
}

impl SettlementReport {
    /// Check if anything settled.
    #[must_use]
    pub fn has_settlements(&self) -> bool {
        !self.settled.is_empty()
    }
}

/// Use case for one settlement pass over the open trades.
pub struct SettleOpenTradesUseCase<S, O>
where
    S: TradeStorePort,
    O: PriceOraclePort,
{
    store: Arc<S>,
    oracle: Arc<O>,
    evaluator: SettlementEvaluator,
}

impl<S, O> SettleOpenTradesUseCase<S, O>
where
    S: TradeStorePort,
    O: PriceOraclePort,
{
    /// Create a new `SettleOpenTradesUseCase` with default config.
    pub fn new(store: Arc<S>, oracle: Arc<O>) -> Self {
        Self {
            store,
            oracle,
            evaluator: SettlementEvaluator::new(),
        }
    }

    /// Create with custom configuration.
    pub const fn with_config(store: Arc<S>, oracle: Arc<O>, config: SettlementConfig) -> Self {
        Self {
            store,
            oracle,
            evaluator: SettlementEvaluator::with_config(config),
        }
    }

    /// The evaluator in use.
    pub const fn evaluator(&self) -> &SettlementEvaluator {
        &self.evaluator
    }

    /// Fetch one price per instrument and settle the open trades that hit.
    ///
    /// Oracle failures skip the instrument for this pass.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Store` if the open trades cannot be read.
    /// A failed write-back is logged and reported in `failed_writes`.
    pub async fn execute(&self) -> Result<SettlementReport, ApplicationError> {
        let open = self.store.list_open().await?;
        let mut report = SettlementReport::default();
        let mut prices: HashMap<InstrumentSymbol, Option<Decimal>> = HashMap::new();

        for mut trade in open {
            let instrument = trade.instrument().clone();

            let price = match prices.get(&instrument) {
                Some(price) => *price,
                None => {
                    let price = self.observe(&instrument).await;
                    if price.is_none() {
                        report.skipped_instruments.push(instrument.clone());
                    }
                    prices.insert(instrument.clone(), price);
                    price
                }
            };

            let Some(price) = price else {
                continue;
            };
            report.evaluated += 1;

            let trigger = self.evaluator.evaluate(&mut trade, Some(price), Timestamp::now());
            let Some(outcome) = trigger.outcome() else {
                tracing::debug!(trade_id = %trade.id(), %price, "Trade still open");
                continue;
            };

            if let Err(e) = self.store.update(trade.clone()).await {
                tracing::warn!(trade_id = %trade.id(), error = %e, "Failed to store settlement");
                report.failed_writes.push(trade.id());
                continue;
            }

            tracing::info!(
                trade_id = %trade.id(),
                trader = %trade.trader(),
                instrument = %instrument,
                %outcome,
                %price,
                "Trade settled"
            );

            report.settled.push(SettledTrade {
                trade_id: trade.id(),
                instrument,
                outcome,
                price,
            });
        }

        Ok(report)
    }

    /// Fetch a price, treating any failure as no observation.
    async fn observe(&self, instrument: &InstrumentSymbol) -> Option<Decimal> {
        match self.oracle.live_price(instrument).await {
            Ok(price) if price > Decimal::ZERO => Some(price),
            Ok(price) => {
                tracing::warn!(%instrument, %price, "Ignoring non-positive price");
                None
            }
            Err(e) => {
                tracing::warn!(%instrument, error = %e, "Failed to get price");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockPriceOraclePort, PriceOracleError, TradeStoreError};
    use crate::domain::settlement::SettlementPriority;
    use crate::domain::trade_record::{Trade, TradeSetup};
    use crate::infrastructure::persistence::InMemoryTradeStore;
    use crate::infrastructure::price_oracle::StaticPriceOracle;
    use chrono::NaiveDate;
    use mockall::predicate::eq;
    use rust_decimal_macros::dec;

    fn trade(id: u64, instrument: &str, entry: Decimal, sl: Decimal, target: Decimal) -> Trade {
        let setup = TradeSetup::new(
            NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            "Waithaka",
            instrument,
            entry,
            sl,
            target,
        );
        Trade::new(TradeId::new(id), setup)
    }

    fn store_with(trades: Vec<Trade>) -> Arc<InMemoryTradeStore> {
        Arc::new(InMemoryTradeStore::with_trades(trades))
    }

    /// Store whose writes fail for one trade id.
    struct RejectingStore {
        inner: InMemoryTradeStore,
        reject: TradeId,
    }

    #[async_trait::async_trait]
    impl TradeStorePort for RejectingStore {
        async fn insert(&self, trade: Trade) -> Result<(), TradeStoreError> {
            self.inner.insert(trade).await
        }

        async fn list(&self) -> Result<Vec<Trade>, TradeStoreError> {
            self.inner.list().await
        }

        async fn find(&self, id: TradeId) -> Result<Option<Trade>, TradeStoreError> {
            self.inner.find(id).await
        }

        async fn update(&self, trade: Trade) -> Result<(), TradeStoreError> {
            if trade.id() == self.reject {
                return Err(TradeStoreError::Unavailable {
                    message: "sheet write failed".to_string(),
                });
            }
            self.inner.update(trade).await
        }

        async fn delete(&self, id: TradeId) -> Result<(), TradeStoreError> {
            self.inner.delete(id).await
        }

        async fn next_id(&self) -> Result<TradeId, TradeStoreError> {
            self.inner.next_id().await
        }
    }

    #[tokio::test]
    async fn settles_hits_and_leaves_others_open() {
        let store = store_with(vec![
            trade(1, "XAUUSD", dec!(2345.50), dec!(2330), dec!(2375)),
            trade(2, "USOIL", dec!(78.20), dec!(79.50), dec!(76.00)),
            trade(3, "EURUSD", dec!(1.0850), dec!(1.0800), dec!(1.0950)),
        ]);
        let oracle = Arc::new(StaticPriceOracle::new());
        oracle.set_price("XAUUSD", dec!(2376.10));
        oracle.set_price("USOIL", dec!(79.60));
        oracle.set_price("EURUSD", dec!(1.0870));

        let use_case = SettleOpenTradesUseCase::new(Arc::clone(&store), oracle);
        let report = use_case.execute().await.unwrap();

        assert_eq!(report.evaluated, 3);
        assert!(report.skipped_instruments.is_empty());
        assert_eq!(
            report.settled,
            vec![
                SettledTrade {
                    trade_id: TradeId::new(1),
                    instrument: InstrumentSymbol::new("XAUUSD"),
                    outcome: TradeOutcome::TargetHit,
                    price: dec!(2376.10),
                },
                SettledTrade {
                    trade_id: TradeId::new(2),
                    instrument: InstrumentSymbol::new("USOIL"),
                    outcome: TradeOutcome::StopLossHit,
                    price: dec!(79.60),
                },
            ]
        );

        let gold = store.find(TradeId::new(1)).await.unwrap().unwrap();
        assert_eq!(gold.closed_price(), Some(dec!(2376.10)));
        let euro = store.find(TradeId::new(3)).await.unwrap().unwrap();
        assert!(euro.is_open());
    }

    #[tokio::test]
    async fn oracle_failure_skips_instrument() {
        let store = store_with(vec![
            trade(1, "XAUUSD", dec!(2345.50), dec!(2330), dec!(2375)),
            trade(2, "BTCUSD", dec!(67000), dec!(65500), dec!(70000)),
        ]);
        let oracle = Arc::new(StaticPriceOracle::new());
        oracle.set_price("BTCUSD", dec!(70500));

        let use_case = SettleOpenTradesUseCase::new(Arc::clone(&store), oracle);
        let report = use_case.execute().await.unwrap();

        assert_eq!(report.evaluated, 1);
        assert_eq!(report.skipped_instruments, vec![InstrumentSymbol::new("XAUUSD")]);
        assert_eq!(report.settled.len(), 1);
        assert!(store.find(TradeId::new(1)).await.unwrap().unwrap().is_open());
    }

    #[tokio::test]
    async fn one_oracle_call_per_instrument() {
        let store = store_with(vec![
            trade(1, "EURUSD", dec!(1.0850), dec!(1.0800), dec!(1.0950)),
            trade(2, "EURUSD", dec!(1.0900), dec!(1.0950), dec!(1.0700)),
            trade(3, "GBPUSD", dec!(1.2700), dec!(1.2650), dec!(1.2800)),
            trade(4, "GBPUSD", dec!(1.2710), dec!(1.2650), dec!(1.2800)),
        ]);

        let mut oracle = MockPriceOraclePort::new();
        oracle
            .expect_live_price()
            .with(eq(InstrumentSymbol::new("EURUSD")))
            .times(1)
            .returning(|_| Ok(dec!(1.0960)));
        oracle
            .expect_live_price()
            .with(eq(InstrumentSymbol::new("GBPUSD")))
            .times(1)
            .returning(|_| {
                Err(PriceOracleError::Unavailable {
                    message: "timeout".to_string(),
                })
            });

        let use_case = SettleOpenTradesUseCase::new(store, Arc::new(oracle));
        let report = use_case.execute().await.unwrap();

        assert_eq!(report.evaluated, 2);
        assert_eq!(report.skipped_instruments, vec![InstrumentSymbol::new("GBPUSD")]);
        let settled: Vec<(u64, TradeOutcome)> = report
            .settled
            .iter()
            .map(|s| (s.trade_id.value(), s.outcome))
            .collect();
        assert_eq!(
            settled,
            vec![(1, TradeOutcome::TargetHit), (2, TradeOutcome::StopLossHit)]
        );
    }

    #[tokio::test]
    async fn non_positive_price_is_no_observation() {
        let store = store_with(vec![trade(1, "EURUSD", dec!(1.0850), dec!(1.0800), dec!(1.0950))]);
        let mut oracle = MockPriceOraclePort::new();
        oracle
            .expect_live_price()
            .returning(|_| Ok(Decimal::ZERO));

        let use_case = SettleOpenTradesUseCase::new(Arc::clone(&store), Arc::new(oracle));
        let report = use_case.execute().await.unwrap();

        assert_eq!(report.evaluated, 0);
        assert!(!report.has_settlements());
        assert!(store.find(TradeId::new(1)).await.unwrap().unwrap().is_open());
    }

    #[tokio::test]
    async fn settled_trades_are_not_refetched() {
        let mut settled = trade(1, "XAUUSD", dec!(2345.50), dec!(2330), dec!(2375));
        settled
            .settle(TradeOutcome::TargetHit, dec!(2375), Timestamp::now())
            .unwrap();
        let store = store_with(vec![settled]);

        let mut oracle = MockPriceOraclePort::new();
        oracle.expect_live_price().times(0);

        let use_case = SettleOpenTradesUseCase::new(store, Arc::new(oracle));
        let report = use_case.execute().await.unwrap();

        assert_eq!(report, SettlementReport::default());
    }

    #[tokio::test]
    async fn stop_first_priority_is_applied() {
        // Long with its stop above entry: 115 satisfies both levels.
        let store = store_with(vec![trade(1, "USTECH", dec!(100), dec!(120), dec!(110))]);
        let oracle = Arc::new(StaticPriceOracle::new());
        oracle.set_price("USTECH", dec!(115));

        let config = SettlementConfig::new(SettlementPriority::StopFirst);
        let use_case = SettleOpenTradesUseCase::with_config(store, oracle, config);
        let report = use_case.execute().await.unwrap();

        assert_eq!(report.settled[0].outcome, TradeOutcome::StopLossHit);
    }

    #[tokio::test]
    async fn failed_write_does_not_stop_the_pass() {
        let store = Arc::new(RejectingStore {
            inner: InMemoryTradeStore::with_trades(vec![
                trade(1, "USTECH", dec!(100), dec!(95), dec!(110)),
                trade(2, "USTECH", dec!(100), dec!(95), dec!(110)),
            ]),
            reject: TradeId::new(1),
        });
        let oracle = Arc::new(StaticPriceOracle::new());
        oracle.set_price("USTECH", dec!(111));

        let use_case = SettleOpenTradesUseCase::new(Arc::clone(&store), oracle);
        let report = use_case.execute().await.unwrap();

        assert_eq!(report.evaluated, 2);
        assert_eq!(report.failed_writes, vec![TradeId::new(1)]);
        assert_eq!(report.settled.len(), 1);
        assert_eq!(report.settled[0].trade_id, TradeId::new(2));

        let first = store.find(TradeId::new(1)).await.unwrap().unwrap();
        assert!(first.is_open());
        let second = store.find(TradeId::new(2)).await.unwrap().unwrap();
        assert_eq!(second.outcome(), TradeOutcome::TargetHit);
    }
}
