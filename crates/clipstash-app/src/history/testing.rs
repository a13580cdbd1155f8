//! Hand-rolled port doubles shared by the store and scheduler tests.

use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use clipstash_core::clipboard::{CapturedSnapshot, ClipboardRecord};
use clipstash_core::ports::{ClockPort, HistoryConfigPort, HistoryRepositoryPort, ListQuery};
use clipstash_core::RecordId;

/// In-memory repository so store logic can be exercised without SQLite.
pub(crate) struct MemoryRepo {
    records: Mutex<Vec<ClipboardRecord>>,
    next_id: AtomicI64,
    fail: AtomicBool,
    sweep_attempts: AtomicU64,
}

impl MemoryRepo {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            fail: AtomicBool::new(false),
            sweep_attempts: AtomicU64::new(0),
        }
    }

    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Make every repository operation fail until reset.
    pub fn fail_next_ops(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// How many sweep invocations reached the repository, failed or not.
    pub fn sweep_attempts(&self) -> u64 {
        self.sweep_attempts.load(Ordering::SeqCst)
    }

    /// Seed a record directly, bypassing the capture path.
    pub fn insert_raw(&self, plain: &str, created_at_ms: i64) -> RecordId {
        let id = RecordId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.records.lock().unwrap().push(ClipboardRecord {
            id,
            html: None,
            plain: Some(plain.to_string()),
            created_at_ms,
            source_app: None,
            size_bytes: plain.len() as i64,
        });
        id
    }

    fn check_available(&self) -> Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(anyhow!("mock storage offline"));
        }
        Ok(())
    }
}

#[async_trait]
impl HistoryRepositoryPort for MemoryRepo {
    async fn insert(&self, snapshot: &CapturedSnapshot, created_at_ms: i64) -> Result<RecordId> {
        self.check_available()?;
        let id = RecordId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.records.lock().unwrap().push(ClipboardRecord {
            id,
            html: snapshot.html().map(str::to_string),
            plain: snapshot.plain().map(str::to_string),
            created_at_ms,
            source_app: snapshot.source_app().map(str::to_string),
            size_bytes: snapshot.size_bytes() as i64,
        });
        Ok(id)
    }

    async fn latest(&self) -> Result<Option<ClipboardRecord>> {
        self.check_available()?;
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .max_by_key(|r| (r.created_at_ms, r.id))
            .cloned())
    }

    async fn get(&self, id: RecordId) -> Result<Option<ClipboardRecord>> {
        self.check_available()?;
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn list(&self, query: &ListQuery) -> Result<Vec<ClipboardRecord>> {
        self.check_available()?;
        let records = self.records.lock().unwrap();
        let mut matching: Vec<ClipboardRecord> = records
            .iter()
            .filter(|r| match &query.search {
                Some(needle) => r
                    .plain
                    .as_deref()
                    .is_some_and(|plain| plain.contains(needle)),
                None => true,
            })
            .cloned()
            .collect();
        matching.sort_by_key(|r| std::cmp::Reverse((r.created_at_ms, r.id)));

        let mut page: Vec<ClipboardRecord> =
            matching.into_iter().skip(query.offset as usize).collect();
        if query.limit > 0 {
            page.truncate(query.limit as usize);
        }
        Ok(page)
    }

    async fn delete(&self, id: RecordId) -> Result<bool> {
        self.check_available()?;
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok(records.len() < before)
    }

    async fn clear(&self) -> Result<u64> {
        self.check_available()?;
        let mut records = self.records.lock().unwrap();
        let removed = records.len() as u64;
        records.clear();
        Ok(removed)
    }

    async fn delete_older_than(&self, cutoff_ms: i64) -> Result<u64> {
        self.sweep_attempts.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.created_at_ms >= cutoff_ms);
        Ok((before - records.len()) as u64)
    }

    async fn count(&self) -> Result<u64> {
        self.check_available()?;
        Ok(self.records.lock().unwrap().len() as u64)
    }

    async fn total_size_bytes(&self) -> Result<u64> {
        self.check_available()?;
        let records = self.records.lock().unwrap();
        Ok(records.iter().map(|r| r.size_bytes as u64).sum())
    }
}

/// Clock whose reading is set by the test.
pub(crate) struct FixedClock {
    now_ms: AtomicI64,
}

impl FixedClock {
    pub fn at(now_ms: i64) -> Arc<Self> {
        Arc::new(Self {
            now_ms: AtomicI64::new(now_ms),
        })
    }

    pub fn set(&self, now_ms: i64) {
        self.now_ms.store(now_ms, Ordering::SeqCst);
    }
}

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.now_ms.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct StaticConfig {
    pub max_record_size_bytes: u64,
    pub max_age: Duration,
    pub sweep_interval: Duration,
    pub max_display_items: u32,
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            max_record_size_bytes: 1024 * 1024,
            max_age: Duration::from_secs(30 * 24 * 3600),
            sweep_interval: Duration::from_secs(3600),
            max_display_items: 50,
        }
    }
}

impl HistoryConfigPort for StaticConfig {
    fn max_record_size_bytes(&self) -> u64 {
        self.max_record_size_bytes
    }

    fn max_age(&self) -> Duration {
        self.max_age
    }

    fn sweep_interval(&self) -> Duration {
        self.sweep_interval
    }

    fn max_display_items(&self) -> u32 {
        self.max_display_items
    }
}
