//! Settlement Value Objects

mod hit_conditions;
mod settlement_config;
mod settlement_trigger;

pub use hit_conditions::HitConditions;
pub use settlement_config::{SettlementConfig, SettlementPriority};
pub use settlement_trigger::SettlementTrigger;
