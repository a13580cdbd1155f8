use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Database file location. `None` resolves to the platform config dir.
    pub database_path: Option<PathBuf>,

    /// Hotkey that toggles the popup list window.
    ///
    /// Stored here, consumed by the external hotkey layer only.
    pub hotkey_show: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistorySettings {
    pub max_age_days: u32,
    pub max_record_size_mb: u32,
    pub cleanup_interval_hours: u32,
}

impl HistorySettings {
    pub fn max_age(&self) -> Duration {
        Duration::from_secs(u64::from(self.max_age_days) * 24 * 3600)
    }

    pub fn max_record_size_bytes(&self) -> u64 {
        u64::from(self.max_record_size_mb) * 1024 * 1024
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(u64::from(self.cleanup_interval_hours) * 3600)
    }
}

/// Popup window knobs. Stored here, consumed by the external UI layer only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    pub window_opacity: f32,
    pub window_width: u32,
    pub window_height: u32,
    pub max_display_items: u32,
    pub font_size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub general: GeneralSettings,

    #[serde(default)]
    pub history: HistorySettings,

    #[serde(default)]
    pub ui: UiSettings,
}

fn current_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}
