//! Trade Aggregate
//!
//! A journaled trade setup, its cached risk metrics and its settlement state.
//!
//! Invariants upheld by construction and by the transition methods:
//! - risk, reward and R:R always equal the metrics of the stored setup
//! - result is always the classification of the outcome
//! - an open trade has no close price; a target or stop settlement does

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::metrics::{TradeMetrics, classify_result};
use crate::domain::shared::{InstrumentSymbol, Timestamp, TradeId, TraderName};
use crate::domain::trade_record::errors::TradeError;
use crate::domain::trade_record::value_objects::{TradeDirection, TradeOutcome, TradeResult};

/// The user-entered part of a trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeSetup {
    /// Trade date (calendar day, no time).
    pub date: NaiveDate,
    /// Who took the trade.
    pub trader: TraderName,
    /// What was traded.
    pub instrument: InstrumentSymbol,
    /// Entry price.
    pub entry: Decimal,
    /// Stop-loss price.
    pub stop_loss: Decimal,
    /// Target price.
    pub target: Decimal,
}

impl TradeSetup {
    /// Create a new setup.
    #[must_use]
    pub fn new(
        date: NaiveDate,
        trader: impl Into<TraderName>,
        instrument: impl Into<InstrumentSymbol>,
        entry: Decimal,
        stop_loss: Decimal,
        target: Decimal,
    ) -> Self {
        Self {
            date,
            trader: trader.into(),
            instrument: instrument.into(),
            entry,
            stop_loss,
            target,
        }
    }

    /// Validate a setup entered through the journal form.
    ///
    /// # Errors
    ///
    /// Returns `TradeError::InvalidSetup` if a name is blank or a price is
    /// not strictly positive.
    pub fn validate(&self) -> Result<(), TradeError> {
        if self.trader.is_blank() {
            return Err(invalid("trader", "must not be empty"));
        }
        if self.instrument.is_blank() {
            return Err(invalid("instrument", "must not be empty"));
        }
        for (field, price) in [
            ("entry", self.entry),
            ("stop_loss", self.stop_loss),
            ("target", self.target),
        ] {
            if price <= Decimal::ZERO {
                return Err(invalid(field, format!("must be positive, got {price}")));
            }
        }
        Ok(())
    }

    /// Direction implied by entry and target, if any.
    #[must_use]
    pub fn direction(&self) -> Option<TradeDirection> {
        TradeDirection::infer(self.entry, self.target)
    }
}

fn invalid(field: &'static str, message: impl Into<String>) -> TradeError {
    TradeError::InvalidSetup {
        field,
        message: message.into(),
    }
}

/// A journaled trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    id: TradeId,
    #[serde(flatten)]
    setup: TradeSetup,
    #[serde(flatten)]
    metrics: TradeMetrics,
    outcome: TradeOutcome,
    closed_price: Option<Decimal>,
    closed_time: Option<Timestamp>,
}

impl Trade {
    /// Create a new open trade, computing its metrics from the setup.
    #[must_use]
    pub fn new(id: TradeId, setup: TradeSetup) -> Self {
        let metrics = TradeMetrics::from_setup(&setup);
        Self {
            id,
            setup,
            metrics,
            outcome: TradeOutcome::Open,
            closed_price: None,
            closed_time: None,
        }
    }

    /// Trade identifier.
    #[must_use]
    pub const fn id(&self) -> TradeId {
        self.id
    }

    /// The setup as entered.
    #[must_use]
    pub const fn setup(&self) -> &TradeSetup {
        &self.setup
    }

    /// Trade date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.setup.date
    }

    /// Trader name.
    #[must_use]
    pub const fn trader(&self) -> &TraderName {
        &self.setup.trader
    }

    /// Instrument symbol.
    #[must_use]
    pub const fn instrument(&self) -> &InstrumentSymbol {
        &self.setup.instrument
    }

    /// Entry price.
    #[must_use]
    pub const fn entry(&self) -> Decimal {
        self.setup.entry
    }

    /// Stop-loss price.
    #[must_use]
    pub const fn stop_loss(&self) -> Decimal {
        self.setup.stop_loss
    }

    /// Target price.
    #[must_use]
    pub const fn target(&self) -> Decimal {
        self.setup.target
    }

    /// Cached risk metrics.
    #[must_use]
    pub const fn metrics(&self) -> &TradeMetrics {
        &self.metrics
    }

    /// Distance from entry to stop.
    #[must_use]
    pub const fn risk(&self) -> Decimal {
        self.metrics.risk
    }

    /// Distance from entry to target.
    #[must_use]
    pub const fn reward(&self) -> Decimal {
        self.metrics.reward
    }

    /// Reward over risk, zero when risk is zero.
    #[must_use]
    pub const fn risk_reward_ratio(&self) -> Decimal {
        self.metrics.risk_reward_ratio
    }

    /// Settlement state.
    #[must_use]
    pub const fn outcome(&self) -> TradeOutcome {
        self.outcome
    }

    /// Win/loss classification, derived from the outcome.
    #[must_use]
    pub const fn result(&self) -> TradeResult {
        classify_result(self.outcome)
    }

    /// Check if the trade is still open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.outcome.is_open()
    }

    /// Price observed at settlement.
    #[must_use]
    pub const fn closed_price(&self) -> Option<Decimal> {
        self.closed_price
    }

    /// When the trade left `Open`.
    #[must_use]
    pub const fn closed_time(&self) -> Option<Timestamp> {
        self.closed_time
    }

    /// Direction implied by entry and target, if any.
    #[must_use]
    pub fn direction(&self) -> Option<TradeDirection> {
        self.setup.direction()
    }

    /// Settle an open trade at an observed market price.
    ///
    /// # Errors
    ///
    /// Returns `TradeError::AlreadySettled` if the trade is not open, or
    /// `TradeError::NotASettlement` if `outcome` is not `TargetHit` or
    /// `StopLossHit`.
    pub fn settle(
        &mut self,
        outcome: TradeOutcome,
        price: Decimal,
        at: Timestamp,
    ) -> Result<(), TradeError> {
        if !self.outcome.is_open() {
            return Err(TradeError::AlreadySettled {
                trade_id: self.id,
                outcome: self.outcome.label().to_string(),
            });
        }
        if !outcome.is_market_settled() {
            return Err(TradeError::NotASettlement {
                outcome: outcome.label().to_string(),
            });
        }

        self.outcome = outcome;
        self.closed_price = Some(price);
        self.closed_time = Some(at);
        Ok(())
    }

    /// Close the trade manually.
    ///
    /// Applies in any state. The close price is left as it was; the close
    /// time is set only if the trade did not already have one.
    pub fn close_manually(&mut self, at: Timestamp) {
        self.outcome = TradeOutcome::ManualClose;
        self.closed_time = self.closed_time.or(Some(at));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    }

    fn gold_setup() -> TradeSetup {
        TradeSetup::new(date(), "Waithaka", "XAUUSD", dec!(2345.50), dec!(2330.00), dec!(2375.00))
    }

    #[test]
    fn new_trade_is_open_with_metrics() {
        let trade = Trade::new(TradeId::new(1), gold_setup());

        assert!(trade.is_open());
        assert_eq!(trade.result(), TradeResult::Open);
        assert_eq!(trade.risk(), dec!(15.50));
        assert_eq!(trade.reward(), dec!(29.50));
        assert_eq!(trade.risk_reward_ratio().round_dp(2), dec!(1.90));
        assert_eq!(trade.closed_price(), None);
        assert_eq!(trade.closed_time(), None);
        assert_eq!(trade.direction(), Some(TradeDirection::Long));
    }

    #[test]
    fn settle_records_price_and_time() {
        let mut trade = Trade::new(TradeId::new(1), gold_setup());
        let at = Timestamp::now();

        trade.settle(TradeOutcome::TargetHit, dec!(2376.10), at).unwrap();

        assert_eq!(trade.outcome(), TradeOutcome::TargetHit);
        assert_eq!(trade.result(), TradeResult::Win);
        assert_eq!(trade.closed_price(), Some(dec!(2376.10)));
        assert_eq!(trade.closed_time(), Some(at));
    }

    #[test]
    fn settle_rejects_settled_trade() {
        let mut trade = Trade::new(TradeId::new(2), gold_setup());
        trade
            .settle(TradeOutcome::StopLossHit, dec!(2329), Timestamp::now())
            .unwrap();

        let err = trade
            .settle(TradeOutcome::TargetHit, dec!(2380), Timestamp::now())
            .unwrap_err();

        assert!(matches!(err, TradeError::AlreadySettled { .. }));
        assert_eq!(trade.outcome(), TradeOutcome::StopLossHit);
        assert_eq!(trade.closed_price(), Some(dec!(2329)));
    }

    #[test]
    fn settle_rejects_non_market_outcome() {
        let mut trade = Trade::new(TradeId::new(3), gold_setup());

        let err = trade
            .settle(TradeOutcome::ManualClose, dec!(2350), Timestamp::now())
            .unwrap_err();

        assert!(matches!(err, TradeError::NotASettlement { .. }));
        assert!(trade.is_open());
    }

    #[test]
    fn close_manually_open_trade() {
        let mut trade = Trade::new(TradeId::new(4), gold_setup());
        let at = Timestamp::now();

        trade.close_manually(at);

        assert_eq!(trade.outcome(), TradeOutcome::ManualClose);
        assert_eq!(trade.result(), TradeResult::Closed);
        assert_eq!(trade.closed_price(), None);
        assert_eq!(trade.closed_time(), Some(at));
    }

    #[test]
    fn close_manually_keeps_settlement_price_and_time() {
        let mut trade = Trade::new(TradeId::new(5), gold_setup());
        let settled_at = Timestamp::parse("2024-05-10T14:00:00Z").unwrap();
        trade
            .settle(TradeOutcome::TargetHit, dec!(2375.20), settled_at)
            .unwrap();

        trade.close_manually(Timestamp::now());

        assert_eq!(trade.outcome(), TradeOutcome::ManualClose);
        assert_eq!(trade.closed_price(), Some(dec!(2375.20)));
        assert_eq!(trade.closed_time(), Some(settled_at));
    }

    #[test]
    fn validate_accepts_positive_prices() {
        assert!(gold_setup().validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_trader() {
        let mut setup = gold_setup();
        setup.trader = TraderName::new("  ");
        let err = setup.validate().unwrap_err();
        assert!(matches!(err, TradeError::InvalidSetup { field: "trader", .. }));
    }

    #[test]
    fn validate_rejects_non_positive_prices() {
        let mut setup = gold_setup();
        setup.stop_loss = Decimal::ZERO;
        let err = setup.validate().unwrap_err();
        assert!(matches!(err, TradeError::InvalidSetup { field: "stop_loss", .. }));

        let mut setup = gold_setup();
        setup.target = dec!(-1);
        let err = setup.validate().unwrap_err();
        assert!(matches!(err, TradeError::InvalidSetup { field: "target", .. }));
    }

    #[test]
    fn serde_flattens_setup_and_metrics() {
        let trade = Trade::new(TradeId::new(7), gold_setup());
        let json = serde_json::to_value(&trade).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["trader"], "Waithaka");
        assert_eq!(json["outcome"], "open");
        assert!(json.get("risk").is_some());

        let back: Trade = serde_json::from_value(json).unwrap();
        assert_eq!(back, trade);
    }
}
