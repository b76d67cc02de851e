//! Trade Journal Binary
//!
//! Seeds the journal, runs the settlement loop and logs the leaderboard on exit.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin trade-journal
//! ```
//!
//! # Environment Variables
//!
//! - `TRADE_JOURNAL_CONFIG`: Config file path (default: config.yaml)
//! - `RUST_LOG`: Log level (overrides `observability.logging.level`)

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::signal;
use tokio_util::sync::CancellationToken;

use trade_journal::application::ports::TradeStorePort;
use trade_journal::application::services::SettlementService;
use trade_journal::config::{Config, JournalConfig, config_path, load_config};
use trade_journal::domain::aggregation::TradeFilter;
use trade_journal::infrastructure::Container;
use trade_journal::infrastructure::persistence::{
    InMemoryTradeStore, fallback_rows, import_rows, load_rows,
};
use trade_journal::infrastructure::price_oracle::StaticPriceOracle;
use trade_journal::telemetry::init_tracing;

type JournalContainer = Container<InMemoryTradeStore, StaticPriceOracle>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let path = config_path();
    let (config, missing) = match load_config(Some(path.as_str())) {
        Ok(config) => (config, false),
        Err(e) if e.is_not_found() => (Config::default(), true),
        Err(e) => return Err(e).with_context(|| format!("loading {path}")),
    };

    init_tracing(&config.observability.logging)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    if missing {
        tracing::warn!(path = %path, "Config file not found, using defaults");
    }

    tracing::info!(
        poll_interval_secs = config.settlement.poll_interval_secs,
        priority = %config.settlement.same_price_priority,
        prices = config.oracle.prices.len(),
        "Starting trade journal"
    );

    let container = Container::new(
        Arc::new(InMemoryTradeStore::new()),
        Arc::new(StaticPriceOracle::from_prices(&config.oracle.prices)),
        &config.journal,
        config.settlement.to_settlement_config(),
    );
    seed_store(&container, &config.journal).await;

    if config.settlement.enabled {
        let service = SettlementService::new(
            container.settle_open_trades_use_case(),
            Duration::from_secs(config.settlement.poll_interval_secs),
            config.settlement.run_once,
        );

        let shutdown = CancellationToken::new();
        tokio::spawn(shutdown_signal(shutdown.clone()));

        let passes = service.run(shutdown).await;
        tracing::info!(passes, "Settlement service stopped");
    } else {
        tracing::info!("Settlement disabled");
    }

    log_leaderboard(&container).await?;

    tracing::info!("Trade journal stopped");
    Ok(())
}

/// Load .env file from current or ancestor directories.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Fill the store from the seed file, or the built-in journal.
///
/// Seeded trades off the configured roster are kept but logged.
async fn seed_store(container: &JournalContainer, journal: &JournalConfig) {
    let store = container.store();
    let roster = container.record_trade_use_case();

    let rows = match journal.seed_file.as_deref().filter(|p| !p.trim().is_empty()) {
        Some(path) => match load_rows(path) {
            Ok(rows) => Some(rows),
            Err(e) => {
                tracing::warn!(path, error = %e, "Failed to load seed file");
                None
            }
        },
        None => None,
    };

    let rows = match rows {
        Some(rows) => rows,
        None if journal.use_fallback_seed => {
            tracing::info!("Seeding built-in journal");
            fallback_rows()
        }
        None => Vec::new(),
    };

    for trade in import_rows(&rows, &journal.instrument_aliases) {
        let id = trade.id();
        if let Err(e) = roster.check_roster(trade.setup()) {
            tracing::warn!(trade_id = %id, error = %e, "Seed trade is off the roster");
        }
        if let Err(e) = store.insert(trade).await {
            tracing::warn!(trade_id = %id, error = %e, "Skipped seed trade");
        }
    }

    tracing::info!(trades = store.len(), "Journal seeded");
}

/// Log the trader and instrument leaderboards.
async fn log_leaderboard(container: &JournalContainer) -> anyhow::Result<()> {
    let report = container
        .leaderboard_use_case()
        .execute(&TradeFilter::new(), None)
        .await
        .context("computing leaderboard")?;

    for row in &report.traders {
        tracing::info!(
            rank = row.rank,
            trader = %row.trader,
            trades = row.stats.total_trades,
            wins = row.stats.wins,
            losses = row.stats.losses,
            win_rate = %row.stats.win_rate,
            average_rr = %row.stats.average_rr,
            pnl = %row.stats.total_pnl,
            "Trader leaderboard"
        );
    }

    for row in &report.instruments {
        tracing::info!(
            rank = row.rank,
            instrument = %row.instrument,
            trades = row.stats.total_trades,
            win_rate = %row.stats.win_rate,
            pnl = %row.stats.total_pnl,
            "Instrument leaderboard"
        );
    }

    tracing::info!(
        trades = report.summary.stats.total_trades,
        open = report.summary.stats.open_trades,
        win_rate = %report.summary.stats.win_rate,
        pnl = %report.summary.stats.total_pnl,
        traders = report.summary.trader_count,
        instruments = report.summary.instrument_count,
        "Journal summary"
    );
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM, then cancel `shutdown`.
async fn shutdown_signal(shutdown: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }

    shutdown.cancel();
}
