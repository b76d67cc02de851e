//! Journal configuration: roster, instruments and seed data.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::shared::{InstrumentSymbol, TraderName};

/// Journal configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalConfig {
    /// Trader roster. Empty accepts any trader.
    #[serde(default = "default_traders")]
    pub traders: Vec<String>,
    /// Tradeable instruments. Empty accepts any instrument.
    #[serde(default = "default_instruments")]
    pub instruments: Vec<String>,
    /// Symbol renames applied when importing legacy rows.
    #[serde(default = "default_instrument_aliases")]
    pub instrument_aliases: HashMap<String, String>,
    /// JSON file of legacy rows to seed the store with.
    #[serde(default)]
    pub seed_file: Option<String>,
    /// Seed the built-in journal when no seed file loads.
    #[serde(default = "default_use_fallback_seed")]
    pub use_fallback_seed: bool,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            traders: default_traders(),
            instruments: default_instruments(),
            instrument_aliases: default_instrument_aliases(),
            seed_file: None,
            use_fallback_seed: default_use_fallback_seed(),
        }
    }
}

impl JournalConfig {
    /// Roster as domain names.
    #[must_use]
    pub fn trader_names(&self) -> Vec<TraderName> {
        self.traders
            .iter()
            .map(|t| TraderName::new(t.trim()))
            .collect()
    }

    /// Instrument list as normalised symbols.
    #[must_use]
    pub fn instrument_symbols(&self) -> Vec<InstrumentSymbol> {
        self.instruments
            .iter()
            .map(|i| InstrumentSymbol::normalized(i))
            .collect()
    }
}

fn default_traders() -> Vec<String> {
    ["Waithaka", "Wallace", "Max"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_instruments() -> Vec<String> {
    [
        "XAUUSD", "USDOIL", "BTCUSD", "USTECH", "EURUSD", "GBPUSD", "AUDUSD", "USDJPY", "USDCAD",
        "NZDUSD",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_instrument_aliases() -> HashMap<String, String> {
    HashMap::from([("USTECH".to_string(), "US30".to_string())])
}

const fn default_use_fallback_seed() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = JournalConfig::default();
        assert_eq!(config.traders, vec!["Waithaka", "Wallace", "Max"]);
        assert_eq!(config.instruments.len(), 10);
        assert_eq!(config.instrument_aliases["USTECH"], "US30");
        assert!(config.seed_file.is_none());
        assert!(config.use_fallback_seed);
    }

    #[test]
    fn domain_conversions() {
        let config = JournalConfig {
            traders: vec![" Max ".to_string()],
            instruments: vec!["eurusd".to_string()],
            ..JournalConfig::default()
        };
        assert_eq!(config.trader_names(), vec![TraderName::new("Max")]);
        assert_eq!(config.instrument_symbols(), vec![InstrumentSymbol::new("EURUSD")]);
    }
}
