//! Settlement Evaluator Domain Service

use rust_decimal::Decimal;

use crate::domain::settlement::value_objects::{
    HitConditions, SettlementConfig, SettlementPriority, SettlementTrigger,
};
use crate::domain::shared::Timestamp;
use crate::domain::trade_record::{Trade, TradeOutcome};

/// Settles open trades against observed market prices.
#[derive(Debug, Clone, Default)]
pub struct SettlementEvaluator {
    config: SettlementConfig,
}

impl SettlementEvaluator {
    /// Create a new evaluator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom configuration.
    #[must_use]
    pub const fn with_config(config: SettlementConfig) -> Self {
        Self { config }
    }

    /// Tie-break rule in use.
    #[must_use]
    pub const fn priority(&self) -> SettlementPriority {
        self.config.priority
    }

    /// Check if a trade can be settled by a market observation.
    ///
    /// False for terminal trades, for a zero entry, for a setup with neither
    /// stop nor target, and for a setup whose target equals its entry.
    #[must_use]
    pub fn is_evaluable(trade: &Trade) -> bool {
        trade.is_open()
            && trade.entry() != Decimal::ZERO
            && !(trade.stop_loss() == Decimal::ZERO && trade.target() == Decimal::ZERO)
            && trade.direction().is_some()
    }

    /// Observe the hit conditions of an evaluable trade at `price`.
    #[must_use]
    pub fn hit_conditions(trade: &Trade, price: Decimal) -> Option<HitConditions> {
        if !Self::is_evaluable(trade) {
            return None;
        }
        let direction = trade.direction()?;
        Some(HitConditions::observe(
            direction,
            trade.stop_loss(),
            trade.target(),
            price,
        ))
    }

    /// Decide what `price` would do to `trade` without changing it.
    #[must_use]
    pub fn check(&self, trade: &Trade, price: Decimal, at: Timestamp) -> SettlementTrigger {
        let outcome = Self::hit_conditions(trade, price)
            .and_then(|conditions| conditions.resolve(self.config.priority));

        match outcome {
            Some(TradeOutcome::TargetHit) => SettlementTrigger::TargetHit {
                price,
                timestamp: at,
            },
            Some(TradeOutcome::StopLossHit) => SettlementTrigger::StopLoss {
                price,
                timestamp: at,
            },
            _ => SettlementTrigger::None,
        }
    }

    /// Evaluate `trade` against an observed price, settling it on a hit.
    ///
    /// A missing or non-positive price is no observation and leaves the trade
    /// untouched, as does any trade that is not open.
    pub fn evaluate(
        &self,
        trade: &mut Trade,
        live_price: Option<Decimal>,
        at: Timestamp,
    ) -> SettlementTrigger {
        let Some(price) = live_price.filter(|p| *p > Decimal::ZERO) else {
            return SettlementTrigger::None;
        };

        let trigger = self.check(trade, price, at);
        if let Some(outcome) = trigger.outcome() {
            if let Err(e) = trade.settle(outcome, price, at) {
                tracing::warn!(trade_id = %trade.id(), error = %e, "Settlement rejected");
                return SettlementTrigger::None;
            }
        }
        trigger
    }
}
