//! Static price oracle configuration.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Price snapshot served by the static oracle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Instrument symbol to last price.
    #[serde(default)]
    pub prices: HashMap<String, Decimal>,
}
