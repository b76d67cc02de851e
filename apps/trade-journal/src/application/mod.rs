//! Application Layer
//!
//! Orchestrates the domain through use cases. It defines:
//!
//! - **Ports**: the price oracle and the trade store
//! - **Use Cases**: record, settle, close, delete and report on trades
//! - **Services**: the settlement polling loop

pub mod errors;
pub mod ports;
pub mod services;
pub mod use_cases;

pub use errors::ApplicationError;
pub use ports::*;
pub use services::*;
pub use use_cases::*;
