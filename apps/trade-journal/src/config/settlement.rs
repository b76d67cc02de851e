//! Settlement configuration for the polling loop.

use serde::{Deserialize, Serialize};

use crate::domain::settlement::{SettlementConfig, SettlementPriority};

/// Settlement configuration as written in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementConfigExternal {
    /// Enable the settlement loop.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Seconds between settlement passes.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
    /// Priority when one price hits both levels: `target_first` or `stop_first`.
    #[serde(default = "default_priority")]
    pub same_price_priority: String,
    /// Run a single pass and exit.
    #[serde(default)]
    pub run_once: bool,
}

impl Default for SettlementConfigExternal {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            poll_interval_secs: default_poll_interval(),
            same_price_priority: default_priority(),
            run_once: false,
        }
    }
}

impl SettlementConfigExternal {
    /// Parsed priority, if the configured value is known.
    #[must_use]
    pub fn priority(&self) -> Option<SettlementPriority> {
        SettlementPriority::parse(&self.same_price_priority)
    }

    /// Convert to the domain `SettlementConfig`.
    ///
    /// Unknown priorities fall back to `target_first`; validation rejects
    /// them before this is reached.
    #[must_use]
    pub fn to_settlement_config(&self) -> SettlementConfig {
        SettlementConfig::new(self.priority().unwrap_or_default())
    }
}

const fn default_enabled() -> bool {
    true
}

const fn default_poll_interval() -> u64 {
    30
}

fn default_priority() -> String {
    "target_first".to_string()
}
