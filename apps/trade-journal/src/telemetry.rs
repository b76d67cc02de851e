//! Tracing Setup
//!
//! Initializes the `tracing` subscriber from the logging configuration.
//!
//! # Configuration
//!
//! - `RUST_LOG`: Overrides `observability.logging.level` when set
//! - `observability.logging.format`: `pretty` (default) or `json`
//!
//! # Usage
//!
//! ```rust,ignore
//! use trade_journal::telemetry::init_tracing;
//!
//! init_tracing(&config.observability.logging)?;
//! ```

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Error returned when the global subscriber cannot be installed.
pub type TelemetryError = Box<dyn std::error::Error + Send + Sync>;

/// Build the level filter: `RUST_LOG` first, then the configured level.
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = env_filter(&config.level);

    if config.is_json() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(false)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
    }
}
