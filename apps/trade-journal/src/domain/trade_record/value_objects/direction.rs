//! Trade Direction Value Object

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trade direction. Never stored; always inferred from the setup prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeDirection {
    /// Target above entry.
    Long,
    /// Target below entry.
    Short,
}

impl TradeDirection {
    /// Infer the direction from entry and target.
    ///
    /// Returns `None` when `target == entry`: such a setup has no direction
    /// and is never settled by a market observation.
    #[must_use]
    pub fn infer(entry: Decimal, target: Decimal) -> Option<Self> {
        if target > entry {
            Some(Self::Long)
        } else if target < entry {
            Some(Self::Short)
        } else {
            None
        }
    }

    /// Check if this is a long trade.
    #[must_use]
    pub const fn is_long(self) -> bool {
        matches!(self, Self::Long)
    }
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Long => write!(f, "long"),
            Self::Short => write!(f, "short"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn infer_long_when_target_above_entry() {
        assert_eq!(
            TradeDirection::infer(dec!(100), dec!(110)),
            Some(TradeDirection::Long)
        );
    }

    #[test]
    fn infer_short_when_target_below_entry() {
        assert_eq!(
            TradeDirection::infer(dec!(100), dec!(90)),
            Some(TradeDirection::Short)
        );
    }

    #[test]
    fn infer_none_when_target_equals_entry() {
        assert_eq!(TradeDirection::infer(dec!(1.0625), dec!(1.06250)), None);
    }

    #[test]
    fn direction_display() {
        assert_eq!(TradeDirection::Long.to_string(), "long");
        assert_eq!(TradeDirection::Short.to_string(), "short");
        assert!(TradeDirection::Long.is_long());
    }
}
