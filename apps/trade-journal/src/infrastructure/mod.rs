//! Infrastructure Layer
//!
//! Adapters for the ports defined in the application layer:
//!
//! - `persistence/`: the in-memory trade store and the legacy spreadsheet
//!   row mapping used to seed it
//! - `price_oracle/`: a static price snapshot oracle
//! - `container`: wires ports and configuration into use cases

pub mod container;
pub mod persistence;
pub mod price_oracle;

pub use container::Container;
