use anyhow::Result;

use crate::clipboard::{CapturedSnapshot, ClipboardRecord};
use crate::ids::RecordId;

/// Paging and filtering for history listings.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// Maximum rows to return; `0` means no cap.
    pub limit: u32,
    /// Rows to skip before collecting results.
    pub offset: u32,
    /// Optional substring filter over the plain-text body.
    pub search: Option<String>,
}

impl ListQuery {
    pub fn page(limit: u32, offset: u32) -> Self {
        Self {
            limit,
            offset,
            search: None,
        }
    }
}

/// Durable storage for clipboard records.
///
/// Implementations assign ids, keep the (created_at desc, id desc) ordering
/// queryable, and make every deletion per-record atomic so concurrent readers
/// see a record either fully present or fully gone.
#[async_trait::async_trait]
pub trait HistoryRepositoryPort: Send + Sync {
    /// Inserts a record and returns the storage-assigned id.
    async fn insert(&self, snapshot: &CapturedSnapshot, created_at_ms: i64) -> Result<RecordId>;

    /// The most recently inserted live record, by created_at descending with
    /// id as tie-breaker. `None` on an empty store.
    async fn latest(&self) -> Result<Option<ClipboardRecord>>;

    async fn get(&self, id: RecordId) -> Result<Option<ClipboardRecord>>;

    /// Records ordered most-recent-first, paged and filtered by `query`.
    async fn list(&self, query: &ListQuery) -> Result<Vec<ClipboardRecord>>;

    /// Returns whether a row was actually removed.
    async fn delete(&self, id: RecordId) -> Result<bool>;

    /// Removes every record; returns the number deleted.
    async fn clear(&self) -> Result<u64>;

    /// Removes every record strictly older than the cutoff; returns the count.
    async fn delete_older_than(&self, cutoff_ms: i64) -> Result<u64>;

    async fn count(&self) -> Result<u64>;

    async fn total_size_bytes(&self) -> Result<u64>;
}
