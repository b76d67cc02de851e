//! Application Services
//!
//! Long-running services built on top of the use cases.

mod settlement_service;

pub use settlement_service::SettlementService;
