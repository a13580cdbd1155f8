use std::time::Duration;

use clipstash_core::ports::HistoryConfigPort;
use clipstash_core::Settings;

/// [`HistoryConfigPort`] view over a loaded settings snapshot.
///
/// Holds the values, not the settings file: a settings change takes effect
/// after reconstructing the store wiring, which is how the host application
/// applies edits anyway.
#[derive(Debug, Clone)]
pub struct SettingsHistoryConfig {
    max_record_size_bytes: u64,
    max_age: Duration,
    sweep_interval: Duration,
    max_display_items: u32,
}

impl SettingsHistoryConfig {
    pub fn new(settings: &Settings) -> Self {
        Self {
            max_record_size_bytes: settings.history.max_record_size_bytes(),
            max_age: settings.history.max_age(),
            sweep_interval: settings.history.sweep_interval(),
            max_display_items: settings.ui.max_display_items,
        }
    }
}

impl HistoryConfigPort for SettingsHistoryConfig {
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
