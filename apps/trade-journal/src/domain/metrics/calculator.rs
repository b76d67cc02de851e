//! Risk/Reward Calculator

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::trade_record::{TradeOutcome, TradeResult, TradeSetup};

/// Risk metrics cached on every trade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeMetrics {
    /// Absolute distance from entry to stop-loss.
    pub risk: Decimal,
    /// Absolute distance from entry to target.
    pub reward: Decimal,
    /// Reward over risk; zero when risk is zero.
    #[serde(rename = "rr_ratio")]
    pub risk_reward_ratio: Decimal,
}

impl TradeMetrics {
    /// Compute metrics from raw prices.
    #[must_use]
    pub fn from_prices(entry: Decimal, stop_loss: Decimal, target: Decimal) -> Self {
        let risk = compute_risk(entry, stop_loss);
        let reward = compute_reward(entry, target);
        Self {
            risk,
            reward,
            risk_reward_ratio: compute_risk_reward_ratio(risk, reward),
        }
    }

    /// Compute metrics for a setup.
    #[must_use]
    pub fn from_setup(setup: &TradeSetup) -> Self {
        Self::from_prices(setup.entry, setup.stop_loss, setup.target)
    }
}

/// Calculate risk.
///
/// Formula: Risk = |Entry - Stop Loss|
#[must_use]
pub fn compute_risk(entry: Decimal, stop_loss: Decimal) -> Decimal {
    (entry - stop_loss).abs()
}

/// Calculate reward.
///
/// Formula: Reward = |Target - Entry|
#[must_use]
pub fn compute_reward(entry: Decimal, target: Decimal) -> Decimal {
    (target - entry).abs()
}

/// Calculate the risk-reward ratio.
///
/// Formula: R:R = Reward / Risk
///
/// Returns zero when risk is zero, and also when the quotient is not
/// representable.
#[must_use]
pub fn compute_risk_reward_ratio(risk: Decimal, reward: Decimal) -> Decimal {
    if risk <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    reward.checked_div(risk).unwrap_or(Decimal::ZERO)
}

/// Classify an outcome as a win, loss, open or neutral close.
#[must_use]
pub const fn classify_result(outcome: TradeOutcome) -> TradeResult {
    match outcome {
        TradeOutcome::Open => TradeResult::Open,
        TradeOutcome::TargetHit => TradeResult::Win,
        TradeOutcome::StopLossHit => TradeResult::Loss,
        TradeOutcome::ManualClose => TradeResult::Closed,
    }
}
