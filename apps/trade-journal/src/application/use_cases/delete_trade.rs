//! Delete Trade Use Case

use std::sync::Arc;

use crate::application::errors::ApplicationError;
use crate::application::ports::TradeStorePort;
use crate::domain::shared::TradeId;

/// Use case for removing a trade from the journal.
pub struct DeleteTradeUseCase<S>
where
    S: TradeStorePort,
{
    store: Arc<S>,
}

impl<S> DeleteTradeUseCase<S>
where
    S: TradeStorePort,
{
    /// Create a new `DeleteTradeUseCase`.
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Delete the trade.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::TradeNotFound` if no trade has that id.
    pub async fn execute(&self, id: TradeId) -> Result<(), ApplicationError> {
        self.store
            .delete(id)
            .await
            .map_err(ApplicationError::from_store)?;
        tracing::info!(trade_id = %id, "Trade deleted");
        Ok(())
    }
}
