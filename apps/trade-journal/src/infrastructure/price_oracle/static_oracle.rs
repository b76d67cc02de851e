//! Static Price Oracle
//!
//! In-process price snapshot. Prices are set from configuration or by the
//! caller; lookups never touch the network.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use rust_decimal::Decimal;

use crate::application::ports::{PriceOracleError, PriceOraclePort};
use crate::domain::shared::InstrumentSymbol;
use crate::infrastructure::price_oracle::symbol::normalize_symbol;

/// Price oracle backed by a map of normalised symbols to prices.
#[derive(Debug, Default)]
pub struct StaticPriceOracle {
    prices: RwLock<HashMap<String, Decimal>>,
}

impl StaticPriceOracle {
    /// Create an oracle with no prices.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an oracle from a symbol to price map.
    #[must_use]
    pub fn from_prices<'a>(prices: impl IntoIterator<Item = (&'a String, &'a Decimal)>) -> Self {
        let oracle = Self::new();
        for (symbol, price) in prices {
            oracle.set_price(symbol, *price);
        }
        oracle
    }

    /// Set or replace the price of a symbol.
    pub fn set_price(&self, symbol: &str, price: Decimal) {
        self.prices.write().insert(normalize_symbol(symbol), price);
    }

    /// Forget the price of a symbol.
    pub fn remove_price(&self, symbol: &str) -> Option<Decimal> {
        self.prices.write().remove(&normalize_symbol(symbol))
    }

    /// Number of priced symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.read().len()
    }

    /// Check if no symbol is priced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.read().is_empty()
    }
}

#[async_trait]
impl PriceOraclePort for StaticPriceOracle {
    async fn live_price(&self, instrument: &InstrumentSymbol) -> Result<Decimal, PriceOracleError> {
        let symbol = normalize_symbol(instrument.as_str());
        let price = self.prices.read().get(&symbol).copied();

        match price {
            Some(price) if price > Decimal::ZERO => Ok(price),
            Some(price) => Err(PriceOracleError::InvalidPrice { symbol, price }),
            None => Err(PriceOracleError::UnknownSymbol { symbol }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn lookup_normalises_symbols() {
        let oracle = StaticPriceOracle::new();
        oracle.set_price("EUR/USD", dec!(1.0870));

        let price = oracle
            .live_price(&InstrumentSymbol::new("EURUSD"))
            .await
            .unwrap();
        assert_eq!(price, dec!(1.0870));
    }

    #[tokio::test]
    async fn unknown_symbol() {
        let oracle = StaticPriceOracle::new();
        let err = oracle
            .live_price(&InstrumentSymbol::new("GBPUSD"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            PriceOracleError::UnknownSymbol {
                symbol: "GBP/USD".to_string()
            }
        );
    }

    #[tokio::test]
    async fn non_positive_price_is_invalid() {
        let oracle = StaticPriceOracle::new();
        oracle.set_price("USOIL", Decimal::ZERO);

        let err = oracle
            .live_price(&InstrumentSymbol::new("USOIL"))
            .await
            .unwrap_err();
        assert!(matches!(err, PriceOracleError::InvalidPrice { .. }));
    }

    #[test]
    fn from_prices_and_remove() {
        let prices = HashMap::from([
            ("XAUUSD".to_string(), dec!(2376.10)),
            ("BTCUSD".to_string(), dec!(70500)),
        ]);
        let oracle = StaticPriceOracle::from_prices(&prices);

        assert_eq!(oracle.len(), 2);
        assert_eq!(oracle.remove_price("xauusd"), Some(dec!(2376.10)));
        assert_eq!(oracle.len(), 1);
        assert!(!oracle.is_empty());
    }
}
