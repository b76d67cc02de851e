//! Application Ports (Driven)
//!
//! Interfaces the application uses to reach external systems.

mod price_oracle_port;
mod trade_store_port;

#[cfg(test)]
pub use price_oracle_port::MockPriceOraclePort;
pub use price_oracle_port::{PriceOracleError, PriceOraclePort};
pub use trade_store_port::{TradeStoreError, TradeStorePort};
