//! Trade Metrics
//!
//! Pure risk/reward arithmetic for a trade setup and the outcome-to-result
//! classification.

mod calculator;

pub use calculator::{
    TradeMetrics, classify_result, compute_reward, compute_risk, compute_risk_reward_ratio,
};
