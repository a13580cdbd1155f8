use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, warn};

use clipstash_core::clipboard::CapturedSnapshot;
use clipstash_core::history::CaptureError;

use crate::history::store::HistoryStore;

/// Bounded so a stalled database cannot balloon memory.
const QUEUE_CAPACITY: usize = 256;

/// FIFO hand-off between the OS clipboard-change callback and the store.
///
/// The callback thread belongs to the host environment and is latency
/// sensitive, so [`CaptureQueue::enqueue`] never touches storage. A single
/// drain task performs the captures in arrival order, which preserves the
/// store's predecessor-dedup semantics for queued snapshots.
pub struct CaptureQueue {
    tx: mpsc::Sender<CapturedSnapshot>,
    worker: tokio::task::AbortHandle,
}

impl CaptureQueue {
    pub fn spawn(store: HistoryStore) -> Self {
        let (tx, rx) = mpsc::channel(QUEUE_CAPACITY);
        let worker = tokio::spawn(drain(store, rx)).abort_handle();
        Self { tx, worker }
    }

    /// Non-blocking enqueue. Returns `false` when the queue is saturated or
    /// the worker is gone; the snapshot is dropped, and the history stays
    /// best-effort.
    pub fn enqueue(&self, snapshot: CapturedSnapshot) -> bool {
        match self.tx.try_send(snapshot) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                warn!("capture queue full, dropping snapshot");
                false
            }
            Err(TrySendError::Closed(_)) => false,
        }
    }

    pub fn shutdown(&self) {
        self.worker.abort();
    }
}

impl Drop for CaptureQueue {
    fn drop(&mut self) {
        self.worker.abort();
    }
}

async fn drain(store: HistoryStore, mut rx: mpsc::Receiver<CapturedSnapshot>) {
    while let Some(snapshot) = rx.recv().await {
        match store.capture(snapshot).await {
            Ok(outcome) => {
                debug!(
                    record_id = %outcome.record_id,
                    status = ?outcome.status,
                    "capture processed"
                );
            }
            // Empty and oversized snapshots are expected watcher noise.
            Err(err @ (CaptureError::Empty | CaptureError::TooLarge { .. })) => {
                debug!(error = %err, "capture skipped");
            }
            Err(err) => {
                warn!(error = %err, "capture failed, keeping the queue alive");
            }
        }
    }
}
