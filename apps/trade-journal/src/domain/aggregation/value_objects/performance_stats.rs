//! Performance Statistics Value Object

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::trade_record::{Trade, TradeOutcome};

/// Win/loss statistics over a set of trades.
///
/// Only target and stop settlements count toward win rate, average R:R and
/// P&L. Every trade counts toward `total_trades`. Sums that leave the
/// `Decimal` range saturate at `Decimal::MAX` / `Decimal::MIN`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceStats {
    /// All trades in the set.
    pub total_trades: usize,
    /// Trades still open.
    pub open_trades: usize,
    /// Trades closed manually.
    pub manual_closes: usize,
    /// Target settlements.
    pub wins: usize,
    /// Stop settlements.
    pub losses: usize,
    /// `wins / (wins + losses) * 100`, zero with no settlements.
    pub win_rate: Decimal,
    /// Mean R:R over settled trades, zero with no settlements.
    pub average_rr: Decimal,
    /// Reward of wins minus risk of losses.
    pub total_pnl: Decimal,
}

impl PerformanceStats {
    /// Compute statistics over `trades`.
    pub fn from_trades<'a>(trades: impl IntoIterator<Item = &'a Trade>) -> Self {
        let mut stats = Self::default();
        let mut rr_sum = Decimal::ZERO;

        for trade in trades {
            stats.total_trades += 1;
            match trade.outcome() {
                TradeOutcome::Open => stats.open_trades += 1,
                TradeOutcome::ManualClose => stats.manual_closes += 1,
                TradeOutcome::TargetHit => {
                    stats.wins += 1;
                    stats.total_pnl = stats.total_pnl.saturating_add(trade.reward());
                    rr_sum = rr_sum.saturating_add(trade.risk_reward_ratio());
                }
                TradeOutcome::StopLossHit => {
                    stats.losses += 1;
                    stats.total_pnl = stats.total_pnl.saturating_sub(trade.risk());
                    rr_sum = rr_sum.saturating_add(trade.risk_reward_ratio());
                }
            }
        }

        let closed = stats.closed_trades();
        if closed > 0 {
            let closed = Decimal::from(closed);
            stats.win_rate = Decimal::from(stats.wins) / closed * Decimal::ONE_HUNDRED;
            stats.average_rr = rr_sum / closed;
        }
        stats
    }

    /// Trades settled at target or stop.
    #[must_use]
    pub const fn closed_trades(&self) -> usize {
        self.wins + self.losses
    }

    /// Check if the set contains no trades.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_trades == 0
    }
}
