//! Settlement Bounded Context
//!
//! Decides whether an open trade has reached its target or stop-loss at an
//! observed market price.

pub mod services;
pub mod value_objects;

pub use services::SettlementEvaluator;
pub use value_objects::{HitConditions, SettlementConfig, SettlementPriority, SettlementTrigger};
