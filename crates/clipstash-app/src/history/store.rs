use std::sync::Arc;

use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info, warn};

use clipstash_core::clipboard::{CapturedSnapshot, ClipboardRecord, RecordSummary};
use clipstash_core::history::{CaptureError, CaptureOutcome, HistoryError, HistoryStats};
use clipstash_core::ports::{ClockPort, HistoryConfigPort, HistoryRepositoryPort, ListQuery};
use clipstash_core::RecordId;

use crate::events::HistoryEvent;

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Durable, ordered, size- and age-bounded log of clipboard snapshots.
///
/// Constructed once at process start and handed to each consumer (watcher,
/// hotkey dispatcher, popup window) by clone. All mutations serialize behind
/// one lock so the dedup check against the most recent record stays
/// read-then-write atomic; reads go straight to the repository.
#[derive(Clone)]
pub struct HistoryStore {
    repo: Arc<dyn HistoryRepositoryPort>,
    clock: Arc<dyn ClockPort>,
    config: Arc<dyn HistoryConfigPort>,
    mutation: Arc<Mutex<()>>,
    events: broadcast::Sender<HistoryEvent>,
}

impl HistoryStore {
    pub fn new(
        repo: Arc<dyn HistoryRepositoryPort>,
        clock: Arc<dyn ClockPort>,
        config: Arc<dyn HistoryConfigPort>,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            repo,
            clock,
            config,
            mutation: Arc::new(Mutex::new(())),
            events,
        }
    }

    /// Change notifications for list-window refreshes.
    pub fn subscribe(&self) -> broadcast::Receiver<HistoryEvent> {
        self.events.subscribe()
    }

    /// Persists a clipboard snapshot.
    ///
    /// Content equal to the most recently stored record is collapsed into it
    /// (predecessor-only dedup); empty and oversized content is rejected
    /// before anything touches storage. A successful insert kicks off a
    /// deferred retention sweep that the caller never waits on.
    pub async fn capture(
        &self,
        snapshot: CapturedSnapshot,
    ) -> Result<CaptureOutcome, CaptureError> {
        if snapshot.is_empty() {
            return Err(CaptureError::Empty);
        }

        let size_bytes = snapshot.size_bytes();
        let max_bytes = self.config.max_record_size_bytes();
        if size_bytes > max_bytes {
            return Err(CaptureError::TooLarge {
                size_bytes,
                max_bytes,
            });
        }

        let outcome = {
            let _guard = self.mutation.lock().await;

            if let Some(prev) = self.repo.latest().await.map_err(capture_storage)? {
                if prev.content_matches(&snapshot) {
                    debug!(record_id = %prev.id, "capture matches predecessor, skipping");
                    return Ok(CaptureOutcome::deduplicated(prev.id));
                }
            }

            let id = self
                .repo
                .insert(&snapshot, self.clock.now_ms())
                .await
                .map_err(capture_storage)?;
            CaptureOutcome::inserted(id)
        };

        let _ = self.events.send(HistoryEvent::RecordCaptured {
            id: outcome.record_id,
        });
        self.spawn_deferred_sweep();

        Ok(outcome)
    }

    /// Listing as summaries, most recent first.
    pub async fn list(&self, query: &ListQuery) -> Result<Vec<RecordSummary>, HistoryError> {
        let records = self.repo.list(query).await.map_err(history_storage)?;
        Ok(records.iter().map(RecordSummary::from_record).collect())
    }

    /// First page of the popup list, sized by the configured display cap.
    pub async fn list_recent(&self) -> Result<Vec<RecordSummary>, HistoryError> {
        self.list(&ListQuery::page(self.config.max_display_items(), 0))
            .await
    }

    pub async fn get(&self, id: RecordId) -> Result<ClipboardRecord, HistoryError> {
        self.repo
            .get(id)
            .await
            .map_err(history_storage)?
            .ok_or(HistoryError::NotFound(id))
    }

    pub async fn delete(&self, id: RecordId) -> Result<(), HistoryError> {
        let removed = {
            let _guard = self.mutation.lock().await;
            self.repo.delete(id).await.map_err(history_storage)?
        };

        if !removed {
            return Err(HistoryError::NotFound(id));
        }

        let _ = self.events.send(HistoryEvent::RecordDeleted { id });
        Ok(())
    }

    pub async fn clear_all(&self) -> Result<(), HistoryError> {
        let removed = {
            let _guard = self.mutation.lock().await;
            self.repo.clear().await.map_err(history_storage)?
        };

        info!(removed, "cleared clipboard history");
        let _ = self.events.send(HistoryEvent::HistoryCleared);
        Ok(())
    }

    /// Removes every record older than the configured maximum age, measured
    /// from `now_ms`. Returns how many records were removed.
    pub async fn run_retention_sweep(&self, now_ms: i64) -> Result<u64, HistoryError> {
        let removed = {
            let _guard = self.mutation.lock().await;
            let cutoff_ms = now_ms - self.config.max_age().as_millis() as i64;
            self.repo
                .delete_older_than(cutoff_ms)
                .await
                .map_err(history_storage)?
        };

        if removed > 0 {
            info!(removed, "retention sweep removed expired records");
            let _ = self.events.send(HistoryEvent::SweepCompleted { removed });
        }
        Ok(removed)
    }

    pub async fn stats(&self) -> Result<HistoryStats, HistoryError> {
        let total_items = self.repo.count().await.map_err(history_storage)?;
        let total_size_bytes = self
            .repo
            .total_size_bytes()
            .await
            .map_err(history_storage)?;
        Ok(HistoryStats {
            total_items,
            total_size_bytes,
        })
    }

    fn spawn_deferred_sweep(&self) {
        let store = self.clone();
        tokio::spawn(async move {
            let now_ms = store.clock.now_ms();
            if let Err(err) = store.run_retention_sweep(now_ms).await {
                warn!(error = %err, "deferred retention sweep failed");
            }
        });
    }
}

fn capture_storage(err: anyhow::Error) -> CaptureError {
    CaptureError::Storage(err.to_string())
}

fn history_storage(err: anyhow::Error) -> HistoryError {
    HistoryError::Storage(err.to_string())
}
