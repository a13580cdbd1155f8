use clipstash_core::RecordId;

/// Change notification fired after every successful mutation, so the popup
/// list window can refresh without polling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEvent {
    RecordCaptured { id: RecordId },
    RecordDeleted { id: RecordId },
    HistoryCleared,
    SweepCompleted { removed: u64 },
}
