use std::time::Duration;

/// Read-only view over the limits the store enforces.
///
/// Backed by the loaded settings; the store never writes configuration.
pub trait HistoryConfigPort: Send + Sync {
    /// Captures above this combined byte size are rejected whole.
    fn max_record_size_bytes(&self) -> u64;

    /// Records older than this are removed by the retention sweep.
    fn max_age(&self) -> Duration;

    /// How often the periodic sweep runs.
    fn sweep_interval(&self) -> Duration;

    /// Default page size for the popup list window.
    fn max_display_items(&self) -> u32;
}
