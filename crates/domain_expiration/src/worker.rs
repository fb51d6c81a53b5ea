//! Periodic expiration worker
//!
//! Invokes [`process_once`] on a fixed interval. Each tick is independent: a
//! failed cycle is logged and does not prevent the next one. Ticks from a
//! single worker never overlap; overlap across independent service instances
//! is handled by the store's uniqueness constraint.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{error, info};

use core_kernel::Timezone;

use crate::ports::ExpirationStore;
use crate::processor::process_once;

/// Clock used by the worker to stamp each cycle
pub type SharedClock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Recurring task that runs the expiration processor
pub struct ExpirationWorker {
    store: Arc<dyn ExpirationStore>,
    business_tz: Timezone,
    interval: Duration,
    clock: SharedClock,
}

impl ExpirationWorker {
    pub fn new(store: Arc<dyn ExpirationStore>, business_tz: Timezone, interval: Duration) -> Self {
        Self {
            store,
            business_tz,
            interval,
            clock: Arc::new(Utc::now),
        }
    }

    /// Replaces the wall clock, for tests
    pub fn with_clock(mut self, clock: SharedClock) -> Self {
        self.clock = clock;
        self
    }

    /// Runs the tick loop until the shutdown signal fires.
    ///
    /// A signal arriving during the wait-for-next-tick period aborts cleanly
    /// without running a partial cycle.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            interval_secs = self.interval.as_secs(),
            business_tz = %self.business_tz.0.name(),
            "Expiration worker started"
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let now = (self.clock)();
                    match process_once(self.store.as_ref(), now, self.business_tz).await {
                        Ok(0) => {}
                        Ok(count) => info!(count, "Expiration worker recorded expirations"),
                        Err(err) => error!(error = %err, "Expiration worker cycle failed"),
                    }
                }
                _ = shutdown.changed() => {
                    info!("Expiration worker shutting down");
                    break;
                }
            }
        }
    }
}
