//! Close Trade Use Case

use std::sync::Arc;

use crate::application::errors::ApplicationError;
use crate::application::ports::TradeStorePort;
use crate::domain::shared::{Timestamp, TradeId};
use crate::domain::trade_record::Trade;

/// Use case for closing a trade manually.
pub struct CloseTradeUseCase<S>
where
    S: TradeStorePort,
{
    store: Arc<S>,
}

impl<S> CloseTradeUseCase<S>
where
    S: TradeStorePort,
{
    /// Create a new `CloseTradeUseCase`.
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Close the trade, whatever its current state.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::TradeNotFound` if no trade has that id.
    pub async fn execute(&self, id: TradeId) -> Result<Trade, ApplicationError> {
        let mut trade = self
            .store
            .find(id)
            .await?
            .ok_or(ApplicationError::TradeNotFound { trade_id: id })?;

        let previous = trade.outcome();
        trade.close_manually(Timestamp::now());
        self.store
            .update(trade.clone())
            .await
            .map_err(ApplicationError::from_store)?;

        tracing::info!(trade_id = %id, %previous, "Trade closed manually");
        Ok(trade)
    }
}
