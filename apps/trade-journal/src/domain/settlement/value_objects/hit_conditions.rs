//! Hit Conditions Value Object

use rust_decimal::Decimal;

use crate::domain::settlement::value_objects::SettlementPriority;
use crate::domain::trade_record::{TradeDirection, TradeOutcome};

/// Target and stop conditions observed independently at one price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitConditions {
    /// Price is at or beyond the target.
    pub target_hit: bool,
    /// Price is at or beyond the stop-loss.
    pub stop_hit: bool,
}

impl HitConditions {
    /// Observe both conditions at `price`.
    ///
    /// A zero level is undefined and never fires.
    #[must_use]
    pub fn observe(
        direction: TradeDirection,
        stop_loss: Decimal,
        target: Decimal,
        price: Decimal,
    ) -> Self {
        let target_defined = target > Decimal::ZERO;
        let stop_defined = stop_loss > Decimal::ZERO;

        match direction {
            TradeDirection::Long => Self {
                target_hit: target_defined && price >= target,
                stop_hit: stop_defined && price <= stop_loss,
            },
            TradeDirection::Short => Self {
                target_hit: target_defined && price <= target,
                stop_hit: stop_defined && price >= stop_loss,
            },
        }
    }

    /// Check if both conditions fired on the same observation.
    #[must_use]
    pub const fn is_ambiguous(self) -> bool {
        self.target_hit && self.stop_hit
    }

    /// Resolve the conditions into a settlement outcome.
    #[must_use]
    pub const fn resolve(self, priority: SettlementPriority) -> Option<TradeOutcome> {
        match (self.target_hit, self.stop_hit, priority) {
            (true, true, SettlementPriority::TargetFirst) | (true, false, _) => {
                Some(TradeOutcome::TargetHit)
            }
            (true, true, SettlementPriority::StopFirst) | (false, true, _) => {
                Some(TradeOutcome::StopLossHit)
            }
            (false, false, _) => None,
        }
    }
}
