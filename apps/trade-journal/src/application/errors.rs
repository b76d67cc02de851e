//! Application Errors

use thiserror::Error;

use crate::application::ports::TradeStoreError;
use crate::domain::shared::{InstrumentSymbol, TradeId, TraderName};
use crate::domain::trade_record::TradeError;

/// Errors returned by use cases.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The trade itself is invalid.
    #[error(transparent)]
    InvalidTrade(#[from] TradeError),

    /// The trade store failed.
    #[error(transparent)]
    Store(#[from] TradeStoreError),

    /// Trader is not on the configured roster.
    #[error("Unknown trader: {trader}")]
    UnknownTrader {
        /// The trader name.
        trader: TraderName,
    },

    /// Instrument is not on the configured list.
    #[error("Unknown instrument: {instrument}")]
    UnknownInstrument {
        /// The instrument symbol.
        instrument: InstrumentSymbol,
    },

    /// No trade with that id.
    #[error("Trade not found: {trade_id}")]
    TradeNotFound {
        /// The trade id.
        trade_id: TradeId,
    },
}

impl ApplicationError {
    /// Map a store miss to `TradeNotFound`, keeping other store errors.
    #[must_use]
    pub fn from_store(error: TradeStoreError) -> Self {
        match error {
            TradeStoreError::NotFound { trade_id } => Self::TradeNotFound { trade_id },
            other => Self::Store(other),
        }
    }
}
