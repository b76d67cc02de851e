//! Strongly-typed identifiers for journal entities.
//!
//! These prevent mixing up trader names, instrument symbols and trade ids.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Journal-assigned trade identifier.
///
/// Ids are assigned by the trade store and increase monotonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeId(u64);

impl TradeId {
    /// Create a trade id from its numeric value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// The id following this one, or `None` at `u64::MAX`.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl fmt::Display for TradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TradeId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

macro_rules! define_name {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new value from a string.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Get the inner string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Check whether the value is blank.
            #[must_use]
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

define_name!(TraderName, "Name of a trader on the journal roster.");
define_name!(
    InstrumentSymbol,
    "Symbol of a traded instrument (e.g. `EURUSD`, `XAUUSD`)."
);

impl InstrumentSymbol {
    /// Create a symbol trimmed and upper-cased, so `" eurusd"` and
    /// `"EURUSD"` group together.
    #[must_use]
    pub fn normalized(value: &str) -> Self {
        Self(value.trim().to_uppercase())
    }
}
