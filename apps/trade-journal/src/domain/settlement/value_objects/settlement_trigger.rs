//! Settlement Trigger Value Object

use rust_decimal::Decimal;

use crate::domain::shared::Timestamp;
use crate::domain::trade_record::TradeOutcome;

/// Result of evaluating a trade against an observed price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettlementTrigger {
    /// Nothing fired; the trade is unchanged.
    None,
    /// Target reached.
    TargetHit {
        /// Observed price that settled the trade.
        price: Decimal,
        /// When the trade settled.
        timestamp: Timestamp,
    },
    /// Stop-loss reached.
    StopLoss {
        /// Observed price that settled the trade.
        price: Decimal,
        /// When the trade settled.
        timestamp: Timestamp,
    },
}

impl SettlementTrigger {
    /// Check if the trade settled.
    #[must_use]
    pub const fn is_triggered(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Check if the target fired.
    #[must_use]
    pub const fn is_target_hit(&self) -> bool {
        matches!(self, Self::TargetHit { .. })
    }

    /// Check if the stop-loss fired.
    #[must_use]
    pub const fn is_stop_loss(&self) -> bool {
        matches!(self, Self::StopLoss { .. })
    }

    /// Outcome the trade settled into, if any.
    #[must_use]
    pub const fn outcome(&self) -> Option<TradeOutcome> {
        match self {
            Self::None => None,
            Self::TargetHit { .. } => Some(TradeOutcome::TargetHit),
            Self::StopLoss { .. } => Some(TradeOutcome::StopLossHit),
        }
    }

    /// Settlement price, if any.
    #[must_use]
    pub const fn price(&self) -> Option<Decimal> {
        match self {
            Self::None => None,
            Self::TargetHit { price, .. } | Self::StopLoss { price, .. } => Some(*price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn trigger_none() {
        let trigger = SettlementTrigger::None;
        assert!(!trigger.is_triggered());
        assert_eq!(trigger.outcome(), None);
        assert_eq!(trigger.price(), None);
    }

    #[test]
    fn trigger_target_hit() {
        let trigger = SettlementTrigger::TargetHit {
            price: dec!(111),
            timestamp: Timestamp::now(),
        };
        assert!(trigger.is_triggered());
        assert!(trigger.is_target_hit());
        assert!(!trigger.is_stop_loss());
        assert_eq!(trigger.outcome(), Some(TradeOutcome::TargetHit));
        assert_eq!(trigger.price(), Some(dec!(111)));
    }

    #[test]
    fn trigger_stop_loss() {
        let trigger = SettlementTrigger::StopLoss {
            price: dec!(94),
            timestamp: Timestamp::now(),
        };
        assert!(trigger.is_stop_loss());
        assert_eq!(trigger.outcome(), Some(TradeOutcome::StopLossHit));
    }
}
