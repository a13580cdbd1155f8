pub mod capture;
pub mod error;
pub mod stats;

pub use capture::{CaptureOutcome, CaptureStatus};
pub use error::{CaptureError, HistoryError};
pub use stats::HistoryStats;
