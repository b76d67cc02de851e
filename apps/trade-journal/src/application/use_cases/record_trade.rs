//! Record Trade Use Case

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::application::errors::ApplicationError;
use crate::application::ports::TradeStorePort;
use crate::domain::shared::{InstrumentSymbol, Timestamp, TraderName};
use crate::domain::trade_record::{Trade, TradeOutcome, TradeSetup};

/// A journal entry as submitted.
#[derive(Debug, Clone)]
pub struct RecordTradeCommand {
    /// Trade date.
    pub date: NaiveDate,
    /// Trader name.
    pub trader: String,
    /// Instrument symbol.
    pub instrument: String,
    /// Entry price.
    pub entry: Decimal,
    /// Stop-loss price.
    pub stop_loss: Decimal,
    /// Target price.
    pub target: Decimal,
    /// Outcome already known when journaling after the fact.
    pub outcome: Option<TradeOutcome>,
}

/// Use case for journaling a new trade.
pub struct RecordTradeUseCase<S>
where
    S: TradeStorePort,
{
    store: Arc<S>,
    traders: Vec<TraderName>,
    instruments: Vec<InstrumentSymbol>,
}

impl<S> RecordTradeUseCase<S>
where
    S: TradeStorePort,
{
    /// Create a new `RecordTradeUseCase` accepting any trader and instrument.
    pub const fn new(store: Arc<S>) -> Self {
        Self {
            store,
            traders: Vec::new(),
            instruments: Vec::new(),
        }
    }

    /// Restrict entries to a trader roster and instrument list.
    ///
    /// An empty list does not restrict.
    pub fn with_roster(
        store: Arc<S>,
        traders: Vec<TraderName>,
        instruments: Vec<InstrumentSymbol>,
    ) -> Self {
        Self {
            store,
            traders,
            instruments,
        }
    }

    /// Check a setup's trader and instrument against the roster.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::UnknownTrader` or `UnknownInstrument` when
    /// the setup is off the roster.
    pub fn check_roster(&self, setup: &TradeSetup) -> Result<(), ApplicationError> {
        if !self.traders.is_empty() && !self.traders.contains(&setup.trader) {
            return Err(ApplicationError::UnknownTrader {
                trader: setup.trader.clone(),
            });
        }
        if !self.instruments.is_empty() && !self.instruments.contains(&setup.instrument) {
            return Err(ApplicationError::UnknownInstrument {
                instrument: setup.instrument.clone(),
            });
        }
        Ok(())
    }

        /// Validate, number and store a new trade.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::InvalidTrade` for a blank name or a
    /// non-positive price, `UnknownTrader`/`UnknownInstrument` when off the
    /// roster, or a store error.
    pub async fn execute(&self, command: RecordTradeCommand) -> Result<Trade, ApplicationError> {
        let setup = TradeSetup::new(
            command.date,
            TraderName::new(command.trader.trim()),
            InstrumentSymbol::normalized(&command.instrument),
            command.entry,
            command.stop_loss,
            command.target,
        );
        setup.validate()?;
        self.check_roster(&setup)?;

        let id = self.store.next_id().await?;
        let mut trade = Trade::new(id, setup);

        let now = Timestamp::now();
        match command.outcome {
            None | Some(TradeOutcome::Open) => {}
            Some(TradeOutcome::TargetHit) => {
                trade.settle(TradeOutcome::TargetHit, trade.target(), now)?;
            }
            Some(TradeOutcome::StopLossHit) => {
                trade.settle(TradeOutcome::StopLossHit, trade.stop_loss(), now)?;
            }
            Some(TradeOutcome::ManualClose) => trade.close_manually(now),
        }

        self.store.insert(trade.clone()).await?;

        tracing::info!(
            trade_id = %trade.id(),
            trader = %trade.trader(),
            instrument = %trade.instrument(),
            rr = %trade.risk_reward_ratio().round_dp(2),
            outcome = %trade.outcome(),
            "Trade recorded"
        );

        Ok(trade)
    }
}
