//! Price Oracle Adapters

mod static_oracle;
mod symbol;

pub use static_oracle::StaticPriceOracle;
pub use symbol::normalize_symbol;
