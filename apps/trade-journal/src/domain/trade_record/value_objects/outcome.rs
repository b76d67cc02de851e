//! Trade Outcome and Result Value Objects
//!
//! `TradeOutcome` is the settlement state machine:
//!
//! ```text
//! Open ──> TargetHit    (Win)
//!      ──> StopLossHit  (Loss)
//!      ──> ManualClose  (Closed)
//! ```
//!
//! `TradeResult` is derived from the outcome and never set independently.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::trade_record::errors::TradeError;

/// Settlement state of a trade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeOutcome {
    /// Awaiting settlement.
    #[default]
    Open,
    /// Price reached the target.
    TargetHit,
    /// Price reached the stop-loss.
    StopLossHit,
    /// Closed by the operator without a market settlement.
    ManualClose,
}

impl TradeOutcome {
    /// Check if the trade is still open.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Check if the outcome was decided by the market (win or loss).
    ///
    /// Only these outcomes contribute to win rate, R:R and P&L.
    #[must_use]
    pub const fn is_market_settled(self) -> bool {
        matches!(self, Self::TargetHit | Self::StopLossHit)
    }

    /// Journal label of the outcome.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::TargetHit => "Target Hit",
            Self::StopLossHit => "SL Hit",
            Self::ManualClose => "Manual Close",
        }
    }

    /// Parse a journal label.
    ///
    /// `Pending` and blank labels read as `Open`; `Closed` and `Breakeven`
    /// fold into `ManualClose`.
    pub fn parse_label(value: &str) -> Result<Self, TradeError> {
        match value.trim().to_lowercase().as_str() {
            "" | "open" | "pending" => Ok(Self::Open),
            "target hit" | "target_hit" | "tp hit" => Ok(Self::TargetHit),
            "sl hit" | "stop loss hit" | "stop_loss_hit" => Ok(Self::StopLossHit),
            "manual close" | "manual_close" | "closed" | "breakeven" => Ok(Self::ManualClose),
            _ => Err(TradeError::UnknownOutcome {
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for TradeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Win/loss classification of a trade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeResult {
    /// Not yet settled.
    #[default]
    Open,
    /// Target reached.
    Win,
    /// Stop-loss reached.
    Loss,
    /// Neutral terminal state; excluded from P&L.
    Closed,
}

impl TradeResult {
    /// Journal label of the result.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Win => "Win",
            Self::Loss => "Loss",
            Self::Closed => "Closed",
        }
    }

    /// Parse a journal label. `Breakeven` folds into `Closed`.
    pub fn parse_label(value: &str) -> Result<Self, TradeError> {
        match value.trim().to_lowercase().as_str() {
            "open" | "pending" => Ok(Self::Open),
            "win" => Ok(Self::Win),
            "loss" => Ok(Self::Loss),
            "closed" | "breakeven" => Ok(Self::Closed),
            _ => Err(TradeError::UnknownResult {
                value: value.to_string(),
            }),
        }
    }

    /// The outcome that produces this result.
    #[must_use]
    pub const fn outcome(self) -> TradeOutcome {
        match self {
            Self::Open => TradeOutcome::Open,
            Self::Win => TradeOutcome::TargetHit,
            Self::Loss => TradeOutcome::StopLossHit,
            Self::Closed => TradeOutcome::ManualClose,
        }
    }
}

impl fmt::Display for TradeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Target Hit", TradeOutcome::TargetHit ; "target hit")]
    #[test_case("SL Hit", TradeOutcome::StopLossHit ; "sl hit")]
    #[test_case("Open", TradeOutcome::Open ; "open")]
    #[test_case("Pending", TradeOutcome::Open ; "pending reads as open")]
    #[test_case("", TradeOutcome::Open ; "blank reads as open")]
    #[test_case("Manual Close", TradeOutcome::ManualClose ; "manual close")]
    #[test_case("Breakeven", TradeOutcome::ManualClose ; "breakeven folds into manual close")]
    #[test_case(" target hit ", TradeOutcome::TargetHit ; "case and whitespace insensitive")]
    fn outcome_parse_label(label: &str, expected: TradeOutcome) {
        assert_eq!(TradeOutcome::parse_label(label).unwrap(), expected);
    }

    #[test]
    fn outcome_parse_unknown_label() {
        let err = TradeOutcome::parse_label("Partial Fill").unwrap_err();
        assert_eq!(
            err,
            TradeError::UnknownOutcome {
                value: "Partial Fill".to_string()
            }
        );
    }

    #[test_case("Win", TradeResult::Win)]
    #[test_case("Loss", TradeResult::Loss)]
    #[test_case("Open", TradeResult::Open)]
    #[test_case("Closed", TradeResult::Closed)]
    #[test_case("Breakeven", TradeResult::Closed)]
    fn result_parse_label(label: &str, expected: TradeResult) {
        assert_eq!(TradeResult::parse_label(label).unwrap(), expected);
    }

    #[test]
    fn result_parse_unknown_label() {
        assert!(TradeResult::parse_label("").is_err());
    }

    #[test]
    fn outcome_labels_roundtrip() {
        for outcome in [
            TradeOutcome::Open,
            TradeOutcome::TargetHit,
            TradeOutcome::StopLossHit,
            TradeOutcome::ManualClose,
        ] {
            assert_eq!(TradeOutcome::parse_label(outcome.label()).unwrap(), outcome);
        }
    }

    #[test]
    fn only_target_and_stop_are_market_settled() {
        assert!(TradeOutcome::TargetHit.is_market_settled());
        assert!(TradeOutcome::StopLossHit.is_market_settled());
        assert!(!TradeOutcome::Open.is_market_settled());
        assert!(!TradeOutcome::ManualClose.is_market_settled());
    }

    #[test]
    fn outcome_serde_snake_case() {
        let json = serde_json::to_string(&TradeOutcome::StopLossHit).unwrap();
        assert_eq!(json, "\"stop_loss_hit\"");
    }
}
