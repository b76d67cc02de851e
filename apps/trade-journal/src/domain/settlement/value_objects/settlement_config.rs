//! Settlement Configuration Value Objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rule for a single observation that satisfies both target and stop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementPriority {
    /// Target takes priority; the trade is recorded as a win.
    #[default]
    TargetFirst,
    /// Stop-loss takes priority (pessimistic assumption).
    StopFirst,
}

impl SettlementPriority {
    /// Parse a configuration value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "target_first" => Some(Self::TargetFirst),
            "stop_first" => Some(Self::StopFirst),
            _ => None,
        }
    }
}

impl fmt::Display for SettlementPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TargetFirst => write!(f, "target_first"),
            Self::StopFirst => write!(f, "stop_first"),
        }
    }
}

/// Configuration for settlement evaluation.
///
/// Pass scheduling belongs to the polling service, not to evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementConfig {
    /// Priority rule when target and stop fire on the same observation.
    pub priority: SettlementPriority,
}

impl SettlementConfig {
    /// Create a new settlement configuration.
    #[must_use]
    pub const fn new(priority: SettlementPriority) -> Self {
        Self { priority }
    }

    /// Create a configuration that resolves ties toward the stop-loss.
    #[must_use]
    pub const fn stop_first() -> Self {
        Self::new(SettlementPriority::StopFirst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_default_is_target_first() {
        assert_eq!(SettlementPriority::default(), SettlementPriority::TargetFirst);
    }

    #[test]
    fn priority_serde() {
        let json = serde_json::to_string(&SettlementPriority::StopFirst).unwrap();
        assert_eq!(json, "\"stop_first\"");

        let parsed: SettlementPriority = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, SettlementPriority::StopFirst);
    }

    #[test]
    fn priority_parse() {
        assert_eq!(
            SettlementPriority::parse("TARGET_FIRST"),
            Some(SettlementPriority::TargetFirst)
        );
        assert_eq!(
            SettlementPriority::parse("stop_first"),
            Some(SettlementPriority::StopFirst)
        );
        assert_eq!(SettlementPriority::parse("high_low_order"), None);
    }

    #[test]
    fn config_default() {
        let config = SettlementConfig::default();
        assert_eq!(config.priority, SettlementPriority::TargetFirst);
    }

    #[test]
    fn config_stop_first() {
        assert_eq!(
            SettlementConfig::stop_first().priority,
            SettlementPriority::StopFirst
        );
    }
}
