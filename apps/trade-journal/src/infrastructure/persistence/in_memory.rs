//! In-memory trade store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::application::ports::{TradeStoreError, TradeStorePort};
use crate::domain::shared::TradeId;
use crate::domain::trade_record::Trade;

/// In-memory implementation of `TradeStorePort`.
///
/// Caller-owned; share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct InMemoryTradeStore {
    trades: RwLock<BTreeMap<TradeId, Trade>>,
}

impl InMemoryTradeStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `trades`. A later trade replaces an earlier
    /// one with the same id.
    #[must_use]
    pub fn with_trades(trades: impl IntoIterator<Item = Trade>) -> Self {
        Self {
            trades: RwLock::new(trades.into_iter().map(|t| (t.id(), t)).collect()),
        }
    }

    /// Get the number of trades in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trades.read().len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trades.read().is_empty()
    }
}

#[async_trait]
impl TradeStorePort for InMemoryTradeStore {
    async fn insert(&self, trade: Trade) -> Result<(), TradeStoreError> {
        let mut trades = self.trades.write();
        if trades.contains_key(&trade.id()) {
            return Err(TradeStoreError::DuplicateId {
                trade_id: trade.id(),
            });
        }
        trades.insert(trade.id(), trade);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Trade>, TradeStoreError> {
        Ok(self.trades.read().values().cloned().collect())
    }

    async fn find(&self, id: TradeId) -> Result<Option<Trade>, TradeStoreError> {
        Ok(self.trades.read().get(&id).cloned())
    }

    async fn update(&self, trade: Trade) -> Result<(), TradeStoreError> {
        let mut trades = self.trades.write();
        let Some(slot) = trades.get_mut(&trade.id()) else {
            return Err(TradeStoreError::NotFound {
                trade_id: trade.id(),
            });
        };
        *slot = trade;
        Ok(())
    }

    async fn delete(&self, id: TradeId) -> Result<(), TradeStoreError> {
        self.trades
            .write()
            .remove(&id)
            .map(|_| ())
            .ok_or(TradeStoreError::NotFound { trade_id: id })
    }

    async fn next_id(&self) -> Result<TradeId, TradeStoreError> {
        let last = self.trades.read().keys().next_back().copied();
        match last {
            None => Ok(TradeId::new(1)),
            Some(id) => id.next().ok_or_else(|| TradeStoreError::Unavailable {
                message: format!("trade id space exhausted after {id}"),
            }),
        }
    }
}
