//! clipstash Application Orchestration Layer
//!
//! Owns the [`HistoryStore`] facade consumed by the watcher, hotkey, and
//! popup-window layers, plus the runtime pieces around it: the FIFO capture
//! queue and the periodic retention sweep scheduler.

pub mod events;
pub mod history;

pub use events::HistoryEvent;
pub use history::{CaptureQueue, HistoryStore, SweepScheduler};
