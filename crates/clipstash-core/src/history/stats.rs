use serde::{Deserialize, Serialize};

/// Aggregate view of the store, shown as the list-window watermark.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryStats {
    pub total_items: u64,
    pub total_size_bytes: u64,
}
