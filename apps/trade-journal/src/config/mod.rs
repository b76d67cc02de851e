//! Configuration module for the trade journal.
//!
//! YAML configuration loading, validation and environment variable
//! interpolation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use trade_journal::config::load_config;
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! // Access configuration values
//! println!("Poll interval: {}s", config.settlement.poll_interval_secs);
//! ```

mod journal;
mod observability;
mod oracle;
mod settlement;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use journal::JournalConfig;
pub use observability::{LoggingConfig, ObservabilityConfig};
pub use oracle::OracleConfig;
pub use settlement::SettlementConfigExternal;

/// Default config file path.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Environment variable overriding the config file path.
pub const CONFIG_PATH_ENV: &str = "TRADE_JOURNAL_CONFIG";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

impl ConfigError {
    /// Check if the config file does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ReadError { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Settlement loop configuration.
    #[serde(default)]
    pub settlement: SettlementConfigExternal,
    /// Journal roster and seed data.
    #[serde(default)]
    pub journal: JournalConfig,
    /// Static price snapshot.
    #[serde(default)]
    pub oracle: OracleConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Config file path: `TRADE_JOURNAL_CONFIG` if set, else `config.yaml`.
#[must_use]
pub fn config_path() -> String {
    std::env::var(CONFIG_PATH_ENV)
        .ok()
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<Option<regex::Regex>> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}").ok()
    });
    let Some(re) = re else {
        return input.to_string();
    };

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map(|m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.map_or_else(String::new, str::to_string),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.settlement.poll_interval_secs == 0 {
        return Err(ConfigError::ValidationError(
            "settlement.poll_interval_secs must be positive".to_string(),
        ));
    }

    if config.settlement.priority().is_none() {
        return Err(ConfigError::ValidationError(format!(
            "settlement.same_price_priority must be one of: [\"target_first\", \"stop_first\"], got {:?}",
            config.settlement.same_price_priority
        )));
    }

    if config.journal.traders.iter().any(|t| t.trim().is_empty()) {
        return Err(ConfigError::ValidationError(
            "journal.traders must not contain empty names".to_string(),
        ));
    }

    if config.journal.instruments.iter().any(|i| i.trim().is_empty()) {
        return Err(ConfigError::ValidationError(
            "journal.instruments must not contain empty symbols".to_string(),
        ));
    }

    if let Some((symbol, price)) = config
        .oracle
        .prices
        .iter()
        .find(|(_, price)| **price <= Decimal::ZERO)
    {
        return Err(ConfigError::ValidationError(format!(
            "oracle.prices.{symbol} must be positive, got {price}"
        )));
    }

    Ok(())
}
