//! Trade Filter Value Object

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{InstrumentSymbol, TraderName};
use crate::domain::trade_record::{Trade, TradeResult};

/// Selection of trades for a report.
///
/// Empty `traders` or `results` mean no restriction on that field. Date
/// bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeFilter {
    /// Traders to keep.
    pub traders: Vec<TraderName>,
    /// Instrument to keep.
    pub instrument: Option<InstrumentSymbol>,
    /// Earliest trade date.
    pub from: Option<NaiveDate>,
    /// Latest trade date.
    pub to: Option<NaiveDate>,
    /// Results to keep.
    pub results: Vec<TradeResult>,
}

impl TradeFilter {
    /// Create a filter that keeps every trade.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to the given traders.
    #[must_use]
    pub fn with_traders(mut self, traders: impl IntoIterator<Item = TraderName>) -> Self {
        self.traders = traders.into_iter().collect();
        self
    }

    /// Restrict to one instrument.
    #[must_use]
    pub fn with_instrument(mut self, instrument: InstrumentSymbol) -> Self {
        self.instrument = Some(instrument);
        self
    }

    /// Restrict to an inclusive date range.
    #[must_use]
    pub const fn between(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Restrict to the given results.
    #[must_use]
    pub fn with_results(mut self, results: impl IntoIterator<Item = TradeResult>) -> Self {
        self.results = results.into_iter().collect();
        self
    }

    /// Check if `trade` passes the filter.
    #[must_use]
    pub fn matches(&self, trade: &Trade) -> bool {
        (self.traders.is_empty() || self.traders.contains(trade.trader()))
            && self
                .instrument
                .as_ref()
                .is_none_or(|instrument| instrument == trade.instrument())
            && self.from.is_none_or(|from| trade.date() >= from)
            && self.to.is_none_or(|to| trade.date() <= to)
            && (self.results.is_empty() || self.results.contains(&trade.result()))
    }

    /// Keep the matching trades, in input order.
    #[must_use]
    pub fn apply(&self, trades: &[Trade]) -> Vec<Trade> {
        trades.iter().filter(|t| self.matches(t)).cloned().collect()
    }
}
