// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Trade Journal - Settlement Core
//!
//! Settlement and analytics engine for a shared forex/CFD trade journal.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (aggregates, value objects, services)
//!   - `trade_record`: Trade aggregate, direction, outcome lifecycle
//!   - `metrics`: Risk, reward and R:R computation
//!   - `settlement`: Target/stop hit detection against a live price
//!   - `aggregation`: Trader and instrument leaderboards, win-rate matrix
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: Interfaces for external systems (`TradeStorePort`, `PriceOraclePort`)
//!   - `use_cases`: `RecordTrade`, `SettleOpenTrades`, `CloseTrade`, `DeleteTrade`, `Leaderboard`
//!   - `services`: Periodic settlement loop
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `persistence`: In-memory trade store, legacy sheet import/export
//!   - `price_oracle`: Static price snapshot and symbol normalisation

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Configuration loading and validation.
pub mod config;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::aggregation::{
    InstrumentStats, PerformanceStats, PerformanceSummary, TradeFilter, TraderStats,
    WinRateMatrix,
};
pub use domain::metrics::TradeMetrics;
pub use domain::settlement::{SettlementEvaluator, SettlementPriority, SettlementTrigger};
pub use domain::shared::{InstrumentSymbol, Timestamp, TradeId, TraderName};
pub use domain::trade_record::{Trade, TradeDirection, TradeOutcome, TradeResult, TradeSetup};

// Application re-exports
pub use application::ports::{PriceOraclePort, TradeStorePort};
pub use application::use_cases::{
    CloseTradeUseCase, DeleteTradeUseCase, LeaderboardUseCase, RecordTradeUseCase,
    SettleOpenTradesUseCase,
};

// Infrastructure re-exports
pub use infrastructure::Container;
pub use infrastructure::persistence::InMemoryTradeStore;
pub use infrastructure::price_oracle::StaticPriceOracle;
