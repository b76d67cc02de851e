//! Trade Record Errors

use thiserror::Error;

use crate::domain::shared::TradeId;

/// Errors raised while building or transitioning a trade.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TradeError {
    /// A setup field failed validation.
    #[error("Invalid trade setup, {field}: {message}")]
    InvalidSetup {
        /// Offending field.
        field: &'static str,
        /// Error details.
        message: String,
    },

    /// An outcome label could not be mapped to a known outcome.
    #[error("Unknown trade outcome: {value}")]
    UnknownOutcome {
        /// The unrecognised label.
        value: String,
    },

    /// A result label could not be mapped to a known result.
    #[error("Unknown trade result: {value}")]
    UnknownResult {
        /// The unrecognised label.
        value: String,
    },

    /// A market settlement was attempted on a trade that is no longer open.
    #[error("Trade {trade_id} is already {outcome}")]
    AlreadySettled {
        /// The trade.
        trade_id: TradeId,
        /// Its current outcome label.
        outcome: String,
    },

    /// Settlement was attempted with a non-settling outcome.
    #[error("{outcome} is not a market settlement outcome")]
    NotASettlement {
        /// The outcome label.
        outcome: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TradeError::InvalidSetup {
            field: "entry",
            message: "must be positive".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid trade setup, entry: must be positive");

        let err = TradeError::UnknownOutcome {
            value: "Partial".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown trade outcome: Partial");

        let err = TradeError::AlreadySettled {
            trade_id: TradeId::new(4),
            outcome: "SL Hit".to_string(),
        };
        assert_eq!(err.to_string(), "Trade 4 is already SL Hit");
    }
}
