//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod close_trade;
mod delete_trade;
mod leaderboard;
mod record_trade;
mod settle_trades;

pub use close_trade::CloseTradeUseCase;
pub use delete_trade::DeleteTradeUseCase;
pub use leaderboard::{LeaderboardReport, LeaderboardUseCase};
pub use record_trade::{RecordTradeCommand, RecordTradeUseCase};
pub use settle_trades::{SettleOpenTradesUseCase, SettledTrade, SettlementReport};
