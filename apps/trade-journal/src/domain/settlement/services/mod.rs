//! Settlement Domain Services

mod settlement_evaluator;

pub use settlement_evaluator::SettlementEvaluator;
