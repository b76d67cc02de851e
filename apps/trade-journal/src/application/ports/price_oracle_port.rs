//! Price Oracle Port (Driven Port)
//!
//! Interface for looking up the last traded price of an instrument.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::shared::InstrumentSymbol;

/// Price oracle error.
///
/// Every variant is treated by the settlement pass as "no observation".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriceOracleError {
    /// The oracle does not know the symbol.
    #[error("Unknown symbol: {symbol}")]
    UnknownSymbol {
        /// The symbol as queried.
        symbol: String,
    },

    /// The oracle refused the request.
    #[error("Price oracle rate limited")]
    RateLimited,

    /// The oracle could not be reached.
    #[error("Price oracle unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// The oracle returned a price that is not strictly positive.
    #[error("Invalid price for {symbol}: {price}")]
    InvalidPrice {
        /// The symbol as queried.
        symbol: String,
        /// The returned price.
        price: Decimal,
    },
}

/// Port for live price lookups.
///
/// Symbol normalisation (e.g. `EURUSD` to `EUR/USD`) is the adapter's job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PriceOraclePort: Send + Sync {
    /// Get the last price of an instrument. Always positive on success.
    async fn live_price(&self, instrument: &InstrumentSymbol) -> Result<Decimal, PriceOracleError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn error_display() {
        let err = PriceOracleError::UnknownSymbol {
            symbol: "XAU/USD".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown symbol: XAU/USD");

        let err = PriceOracleError::InvalidPrice {
            symbol: "BTC/USD".to_string(),
            price: dec!(0),
        };
        assert_eq!(err.to_string(), "Invalid price for BTC/USD: 0");
    }

    #[tokio::test]
    async fn mock_oracle_returns_configured_price() {
        let mut oracle = MockPriceOraclePort::new();
        oracle
            .expect_live_price()
            .returning(|_| Ok(dec!(1.0850)));

        let price = oracle
            .live_price(&InstrumentSymbol::new("EURUSD"))
            .await
            .unwrap();
        assert_eq!(price, dec!(1.0850));
    }
}
