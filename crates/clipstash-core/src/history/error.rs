use thiserror::Error;

use crate::ids::RecordId;

/// Why a capture was rejected. None of these are fatal: the watcher logs the
/// skipped capture and keeps listening for the next clipboard change.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("clipboard content is empty")]
    Empty,

    #[error("content of {size_bytes} bytes exceeds the {max_bytes} byte record cap")]
    TooLarge { size_bytes: u64, max_bytes: u64 },

    #[error("storage unavailable: {0}")]
    Storage(String),
}

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("record {0} not found")]
    NotFound(RecordId),

    #[error("storage unavailable: {0}")]
    Storage(String),
}
