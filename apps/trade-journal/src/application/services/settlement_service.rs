//! Settlement Service
//!
//! Runs the settlement pass on a fixed interval until shutdown. The service
//! owns the "when to check" policy; the use case owns "what happens on check".

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::application::ports::{PriceOraclePort, TradeStorePort};
use crate::application::use_cases::{SettleOpenTradesUseCase, SettlementReport};

/// Polling loop around [`SettleOpenTradesUseCase`].
pub struct SettlementService<S, O>
where
    S: TradeStorePort,
    O: PriceOraclePort,
{
    use_case: SettleOpenTradesUseCase<S, O>,
    interval: Duration,
    run_once: bool,
}

impl<S, O> SettlementService<S, O>
where
    S: TradeStorePort,
    O: PriceOraclePort,
{
    /// Create a new settlement service.
    pub const fn new(
        use_case: SettleOpenTradesUseCase<S, O>,
        interval: Duration,
        run_once: bool,
    ) -> Self {
        Self {
            use_case,
            interval,
            run_once,
        }
    }

    /// Interval between passes.
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Run one pass, logging instead of propagating failures.
    pub async fn tick(&self) -> Option<SettlementReport> {
        match self.use_case.execute().await {
            Ok(report) => {
                tracing::debug!(
                    evaluated = report.evaluated,
                    settled = report.settled.len(),
                    skipped = report.skipped_instruments.len(),
                    failed_writes = report.failed_writes.len(),
                    "Settlement pass complete"
                );
                Some(report)
            }
            Err(e) => {
                tracing::error!(error = %e, "Settlement pass failed");
                None
            }
        }
    }

    /// Run passes until `shutdown` is cancelled.
    ///
    /// The first pass runs immediately. With `run_once` the loop returns after
    /// that pass.
    pub async fn run(&self, shutdown: CancellationToken) -> usize {
        tracing::info!(
            interval_secs = self.interval.as_secs(),
            run_once = self.run_once,
            "Starting settlement service"
        );

        let mut passes = 0;
        let mut interval = tokio::time::interval(self.interval.max(Duration::from_millis(1)));
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    self.tick().await;
                    passes += 1;
                    if self.run_once {
                        break;
                    }
                }
                () = shutdown.cancelled() => {
                    tracing::info!("Settlement service shutting down");
                    break;
                }
            }
        }
        passes
    }
}
