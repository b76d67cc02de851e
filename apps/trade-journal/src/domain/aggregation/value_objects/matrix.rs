//! Win-Rate Matrix Value Object

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{InstrumentSymbol, TraderName};

/// Win rate of every instrument × trader pair.
///
/// `cells[i][j]` is the win rate of `instruments[i]` traded by `traders[j]`:
/// `None` when the pair has no trades, `Some(0)` when none of them settled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinRateMatrix {
    /// Row labels, in first-appearance order.
    pub instruments: Vec<InstrumentSymbol>,
    /// Column labels, in first-appearance order.
    pub traders: Vec<TraderName>,
    /// Row-major cells.
    pub cells: Vec<Vec<Option<Decimal>>>,
}

impl WinRateMatrix {
    /// Win rate of one pair.
    #[must_use]
    pub fn get(&self, instrument: &InstrumentSymbol, trader: &TraderName) -> Option<Decimal> {
        let row = self.instruments.iter().position(|i| i == instrument)?;
        let col = self.traders.iter().position(|t| t == trader)?;
        self.cells.get(row)?.get(col).copied().flatten()
    }

    /// Check if the matrix has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}
