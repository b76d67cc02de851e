//! Legacy Spreadsheet Rows
//!
//! Mapping between the trade journal spreadsheet columns
//! (`id, date, trader, instrument, entry, sl, target, risk, reward, rrRatio,
//! outcome, result`) and the `Trade` aggregate.
//!
//! On import the `risk`, `reward` and `rrRatio` columns are ignored and
//! recomputed from the prices. On export they are written with the journal's
//! rounding.

use std::collections::HashMap;
use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::shared::{InstrumentSymbol, Timestamp, TradeId, TraderName};
use crate::domain::trade_record::{Trade, TradeError, TradeOutcome, TradeResult, TradeSetup};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors reading or mapping legacy rows.
#[derive(Debug, Error)]
pub enum LegacySheetError {
    /// The file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// File path.
        path: String,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The file is not a JSON array.
    #[error("Failed to parse {path}: {source}")]
    Parse {
        /// File path.
        path: String,
        /// Underlying error.
        source: serde_json::Error,
    },

    /// A row has an unusable field.
    #[error("Row {id}: {reason}")]
    InvalidRow {
        /// Row id as read.
        id: u64,
        /// What is wrong.
        reason: String,
    },

    /// A row's outcome or result label is unknown.
    #[error("Row {id}: {source}")]
    UnknownStatus {
        /// Row id as read.
        id: u64,
        /// Underlying error.
        source: TradeError,
    },
}

/// One spreadsheet row. Missing columns read as zero or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LegacyTradeRow {
    /// Row id.
    pub id: u64,
    /// Trade date, `YYYY-MM-DD`.
    pub date: String,
    /// Trader name.
    pub trader: String,
    /// Instrument symbol as entered.
    pub instrument: String,
    /// Entry price.
    pub entry: Decimal,
    /// Stop-loss price.
    pub sl: Decimal,
    /// Target price.
    pub target: Decimal,
    /// Risk as stored.
    pub risk: Decimal,
    /// Reward as stored.
    pub reward: Decimal,
    /// R:R as stored.
    pub rr_ratio: Decimal,
    /// Outcome label.
    pub outcome: String,
    /// Result label.
    pub result: String,
}

impl LegacyTradeRow {
    /// Settlement state of the row. The `result` column is used when
    /// `outcome` is blank.
    ///
    /// # Errors
    ///
    /// Returns `LegacySheetError::UnknownStatus` for an unrecognised label.
    pub fn trade_outcome(&self) -> Result<TradeOutcome, LegacySheetError> {
        let status = if self.outcome.trim().is_empty() && !self.result.trim().is_empty() {
            TradeResult::parse_label(&self.result).map(TradeResult::outcome)
        } else {
            TradeOutcome::parse_label(&self.outcome)
        };
        status.map_err(|source| LegacySheetError::UnknownStatus {
            id: self.id,
            source,
        })
    }

    /// Map the row to a trade, applying instrument aliases.
    ///
    /// A settled row closes at the level it hit, at the start of its date.
    ///
    /// # Errors
    ///
    /// Returns `LegacySheetError::InvalidRow` for a zero id, a bad date or a
    /// blank name, and `UnknownStatus` for an unrecognised label.
    pub fn to_trade(&self, aliases: &HashMap<String, String>) -> Result<Trade, LegacySheetError> {
        let invalid = |reason: &str| LegacySheetError::InvalidRow {
            id: self.id,
            reason: reason.to_string(),
        };

        if self.id == 0 {
            return Err(invalid("missing id"));
        }
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|e| invalid(&format!("bad date {:?}: {e}", self.date)))?;

        let trader = TraderName::new(self.trader.trim());
        let instrument = resolve_instrument(&self.instrument, aliases);
        if trader.is_blank() {
            return Err(invalid("missing trader"));
        }
        if instrument.is_blank() {
            return Err(invalid("missing instrument"));
        }

        let outcome = self.trade_outcome()?;
        let setup = TradeSetup::new(date, trader, instrument, self.entry, self.sl, self.target);
        let mut trade = Trade::new(TradeId::new(self.id), setup);

        let closed_at = Timestamp::new(date.and_time(NaiveTime::MIN).and_utc());
        let settled = match outcome {
            TradeOutcome::Open => Ok(()),
            TradeOutcome::TargetHit => trade.settle(outcome, self.target, closed_at),
            TradeOutcome::StopLossHit => trade.settle(outcome, self.sl, closed_at),
            TradeOutcome::ManualClose => {
                trade.close_manually(closed_at);
                Ok(())
            }
        };
        settled.map_err(|source| LegacySheetError::UnknownStatus {
            id: self.id,
            source,
        })?;

        Ok(trade)
    }
}

impl From<&Trade> for LegacyTradeRow {
    fn from(trade: &Trade) -> Self {
        Self {
            id: trade.id().value(),
            date: trade.date().format(DATE_FORMAT).to_string(),
            trader: trade.trader().to_string(),
            instrument: trade.instrument().to_string(),
            entry: trade.entry(),
            sl: trade.stop_loss(),
            target: trade.target(),
            risk: round_half_up(trade.risk(), 4),
            reward: round_half_up(trade.reward(), 4),
            rr_ratio: round_half_up(trade.risk_reward_ratio(), 2),
            outcome: trade.outcome().label().to_string(),
            result: trade.result().label().to_string(),
        }
    }
}

fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Apply an alias (matched case-insensitively) and upper-case the symbol.
fn resolve_instrument(raw: &str, aliases: &HashMap<String, String>) -> InstrumentSymbol {
    let raw = raw.trim();
    let resolved = aliases
        .iter()
        .find(|(from, _)| from.trim().eq_ignore_ascii_case(raw))
        .map_or(raw, |(_, to)| to.as_str());
    InstrumentSymbol::normalized(resolved)
}

/// Read rows from a JSON array file. Malformed rows are skipped.
///
/// # Errors
///
/// Returns `LegacySheetError::Read` or `Parse` if the file cannot be read or
/// is not a JSON array.
pub fn load_rows(path: impl AsRef<Path>) -> Result<Vec<LegacyTradeRow>, LegacySheetError> {
    let path = path.as_ref();
    let shown = path.display().to_string();

    let contents = std::fs::read_to_string(path).map_err(|source| LegacySheetError::Read {
        path: shown.clone(),
        source,
    })?;
    let values: Vec<serde_json::Value> =
        serde_json::from_str(&contents).map_err(|source| LegacySheetError::Parse {
            path: shown.clone(),
            source,
        })?;

    let mut rows = Vec::with_capacity(values.len());
    for value in values {
        match serde_json::from_value::<LegacyTradeRow>(value) {
            Ok(row) => rows.push(row),
            Err(e) => tracing::warn!(path = %shown, error = %e, "Skipped malformed row"),
        }
    }
    Ok(rows)
}

/// Map rows to trades. Rows that fail to map are skipped.
#[must_use]
pub fn import_rows(rows: &[LegacyTradeRow], aliases: &HashMap<String, String>) -> Vec<Trade> {
    rows.iter()
        .filter_map(|row| match row.to_trade(aliases) {
            Ok(trade) => Some(trade),
            Err(e) => {
                tracing::warn!(row_id = row.id, error = %e, "Skipped unmappable row");
                None
            }
        })
        .collect()
}

/// The built-in journal used when no seed file is available.
#[must_use]
pub fn fallback_rows() -> Vec<LegacyTradeRow> {
    let row = |id: u64,
               date: &str,
               trader: &str,
               instrument: &str,
               prices: [Decimal; 6],
               outcome: &str,
               result: &str| LegacyTradeRow {
        id,
        date: date.to_string(),
        trader: trader.to_string(),
        instrument: instrument.to_string(),
        entry: prices[0],
        sl: prices[1],
        target: prices[2],
        risk: prices[3],
        reward: prices[4],
        rr_ratio: prices[5],
        outcome: outcome.to_string(),
        result: result.to_string(),
    };

    vec![
        row(
            1,
            "2023-10-08",
            "Waithaka",
            "XAUUSD",
            [dec!(1820.50), dec!(1815.00), dec!(1830.00), dec!(5.50), dec!(9.50), dec!(1.73)],
            "Target Hit",
            "Win",
        ),
        row(
            2,
            "2023-10-07",
            "Wallace",
            "USOIL",
            [dec!(89.30), dec!(88.50), dec!(91.00), dec!(0.80), dec!(1.70), dec!(2.13)],
            "SL Hit",
            "Loss",
        ),
        row(
            3,
            "2023-10-06",
            "Max",
            "BTCUSD",
            [
                dec!(27450.00),
                dec!(27200.00),
                dec!(27800.00),
                dec!(250.00),
                dec!(350.00),
                dec!(1.40),
            ],
            "Target Hit",
            "Win",
        ),
        row(
            4,
            "2023-10-05",
            "Waithaka",
            "EURUSD",
            [dec!(1.06250), dec!(1.06000), dec!(1.06700), dec!(0.00250), dec!(0.00450), dec!(1.80)],
            "Target Hit",
            "Win",
        ),
    ]
}
