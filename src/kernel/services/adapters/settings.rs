use super::paths::get_cache_dir;
use crate::kernel::services::ports::settings::{Result, Settings};
use std::path::{Path, PathBuf};

const SETTINGS_DIR: &str = ".litesearch";
const SETTINGS_FILE: &str = "settings.json";

pub fn get_settings_path() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

/// Writes default settings to `path` unless a file already exists there.
pub fn write_default_settings(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content =
            serde_json::to_string_pretty(&Settings::default()).unwrap_or_else(|_| "{}".to_string());
        std::fs::write(path, content)?;
    }
    Ok(())
}

pub fn load_settings_from(path: &Path) -> Result<Settings> {
    let data = std::fs::read_to_string(path)?;
    let settings = serde_json::from_str(&data)?;
    Ok(settings)
}

/// Loads `path`, first writing the defaults there if no file exists yet.
pub fn load_or_init_settings(path: &Path) -> Result<Settings> {
    write_default_settings(path)?;
    load_settings_from(path)
}

/// Settings from the per-user file, created with defaults on first use.
/// `None` if the file cannot be created or parsed.
pub fn load_settings() -> Option<Settings> {
    let path = get_settings_path()?;
    match load_or_init_settings(&path) {
        Ok(settings) => Some(settings),
        Err(error) => {
            tracing::warn!(path = %path.display(), error = %error, "load settings failed");
            None
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
