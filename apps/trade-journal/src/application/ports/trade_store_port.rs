//! Trade Store Port (Driven Port)
//!
//! Interface for persisting the trade journal.

use async_trait::async_trait;

use crate::domain::shared::TradeId;
use crate::domain::trade_record::Trade;

/// Trade store error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TradeStoreError {
    /// No trade with that id.
    #[error("Trade {trade_id} not found in store")]
    NotFound {
        /// The trade id.
        trade_id: TradeId,
    },

    /// A trade with that id already exists.
    #[error("Trade {trade_id} already exists")]
    DuplicateId {
        /// The trade id.
        trade_id: TradeId,
    },

    /// The backing store failed.
    #[error("Trade store unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },
}

/// Port for trade persistence.
#[async_trait]
pub trait TradeStorePort: Send + Sync {
    /// Append a new trade.
    async fn insert(&self, trade: Trade) -> Result<(), TradeStoreError>;

    /// All trades, ordered by id.
    async fn list(&self) -> Result<Vec<Trade>, TradeStoreError>;

    /// Find a trade by id.
    async fn find(&self, id: TradeId) -> Result<Option<Trade>, TradeStoreError>;

    /// Replace the trade with the same id.
    async fn update(&self, trade: Trade) -> Result<(), TradeStoreError>;

    /// Remove a trade.
    async fn delete(&self, id: TradeId) -> Result<(), TradeStoreError>;

    /// Id for the next trade: highest id plus one, or 1 when empty.
    async fn next_id(&self) -> Result<TradeId, TradeStoreError>;

    /// Open trades, ordered by id.
    async fn list_open(&self) -> Result<Vec<Trade>, TradeStoreError> {
        let mut trades = self.list().await?;
        trades.retain(Trade::is_open);
        Ok(trades)
    }
}
