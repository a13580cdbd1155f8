use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use clipstash_core::ports::ClockPort;

use crate::history::store::HistoryStore;

/// Drives the periodic retention sweep: once right after startup, then on
/// every interval tick. A failed sweep is logged and retried on the next
/// tick; the scheduler itself never dies from a storage error.
pub struct SweepScheduler {
    handle: tokio::task::AbortHandle,
}

impl SweepScheduler {
    pub fn spawn(store: HistoryStore, clock: Arc<dyn ClockPort>, interval: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                // The first tick fires immediately, which doubles as the
                // startup sweep.
                ticker.tick().await;
                let now_ms = clock.now_ms();
                if let Err(err) = store.run_retention_sweep(now_ms).await {
                    warn!(error = %err, "retention sweep failed, retrying next tick");
                }
            }
        })
        .abort_handle();

        Self { handle }
    }

    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for SweepScheduler {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
