//! Persistence Adapters
//!
//! Implementations of the trade store port and the legacy journal mapping.

pub mod in_memory;
pub mod legacy_sheet;

pub use in_memory::InMemoryTradeStore;
pub use legacy_sheet::{LegacySheetError, LegacyTradeRow, fallback_rows, import_rows, load_rows};
