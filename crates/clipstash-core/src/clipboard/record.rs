use chrono::{DateTime, Local};

use crate::clipboard::CapturedSnapshot;
use crate::ids::RecordId;

/// Characters kept in a listing preview before the text is cut off.
pub const PREVIEW_LEN: usize = 50;

/// A persisted clipboard snapshot. Never mutated after insert; the retention
/// sweep or an explicit delete is the only way out of the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardRecord {
    pub id: RecordId,
    pub html: Option<String>,
    pub plain: Option<String>,
    pub created_at_ms: i64,
    pub source_app: Option<String>,
    pub size_bytes: i64,
}

impl ClipboardRecord {
    /// Whether this record holds exactly the `(html, plain)` pair of the
    /// given snapshot. Used for the dedup check against the predecessor.
    pub fn content_matches(&self, snapshot: &CapturedSnapshot) -> bool {
        self.html.as_deref() == snapshot.html() && self.plain.as_deref() == snapshot.plain()
    }
}

/// Listing view of a record: the blobs are reduced to a one-line preview so
/// the popup list stays cheap, full content comes from a `get` by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSummary {
    pub id: RecordId,
    pub preview: String,
    pub display_time: String,
    pub created_at_ms: i64,
    pub source_app: Option<String>,
    pub size_bytes: i64,
}

impl RecordSummary {
    pub fn from_record(record: &ClipboardRecord) -> Self {
        Self {
            id: record.id,
            preview: preview_of(record.plain.as_deref()),
            display_time: display_time(record.created_at_ms),
            created_at_ms: record.created_at_ms,
            source_app: record.source_app.clone(),
            size_bytes: record.size_bytes,
        }
    }
}

/// Single-line preview: newlines collapsed to spaces, trimmed, cut at
/// [`PREVIEW_LEN`] characters with a trailing ellipsis.
fn preview_of(plain: Option<&str>) -> String {
    let collapsed = plain.unwrap_or_default().replace('\n', " ");
    let trimmed = collapsed.trim();

    let mut preview: String = trimmed.chars().take(PREVIEW_LEN).collect();
    if trimmed.chars().count() > PREVIEW_LEN {
        preview.push_str("...");
    }
    preview
}

/// Timestamp label shown next to each list row, e.g. `08-06 14:32`.
fn display_time(created_at_ms: i64) -> String {
    DateTime::from_timestamp_millis(created_at_ms)
        .map(|dt| dt.with_timezone(&Local).format("%m-%d %H:%M").to_string())
        .unwrap_or_default()
}
