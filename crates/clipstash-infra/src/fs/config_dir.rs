use anyhow::{Context, Result};
use std::path::PathBuf;

/// Get the clipstash configuration root directory.
///
/// - Linux: `$XDG_CONFIG_HOME/clipstash` or `~/.config/clipstash`
/// - macOS: `~/Library/Application Support/clipstash`
/// - Windows: `%APPDATA%\clipstash`
///
/// This function does not create the directory; the caller decides when.
pub fn config_dir() -> Result<PathBuf> {
    let base_dir = platform_config_dir().context("Failed to get platform config directory")?;

    Ok(base_dir.join("clipstash"))
}

/// Database file location used when the settings carry no explicit path.
pub fn default_database_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("clipboard_store.db"))
}

/// Settings file location.
pub fn settings_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("settings.json"))
}

fn platform_config_dir() -> Result<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        if let Some(xdg_config_home) = std::env::var_os("XDG_CONFIG_HOME") {
            return Ok(PathBuf::from(xdg_config_home));
        }
    }

    dirs::config_dir().ok_or_else(|| anyhow::anyhow!("Unable to get config directory"))
}
