use super::model::*;

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            database_path: None,
            hotkey_show: "<ctrl>+grave".to_string(),
        }
    }
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_age_days: 3,
            max_record_size_mb: 1,
            cleanup_interval_hours: 1,
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            window_opacity: 0.95,
            window_width: 400,
            window_height: 300,
            max_display_items: 50,
            font_size: 12,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            general: GeneralSettings::default(),
            history: HistorySettings::default(),
            ui: UiSettings::default(),
        }
    }
}
