use super::config::SearchConfig;
use serde::{Deserialize, Serialize};
use std::io;

pub type Result<T> = std::result::Result<T, SettingsError>;

#[derive(Debug)]
pub enum SettingsError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Invalid settings: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<io::Error> for SettingsError {
    fn from(e: io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub search: SearchSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_case_sensitive")]
    pub case_sensitive: bool,
    /// Unclamped; out-of-range values are clamped by [`SearchConfig`].
    #[serde(default = "default_extra_lines")]
    pub extra_lines: i64,
}

fn default_case_sensitive() -> bool {
    true
}

fn default_extra_lines() -> i64 {
    2
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            case_sensitive: default_case_sensitive(),
            extra_lines: default_extra_lines(),
        }
    }
}

impl SearchSettings {
    pub fn to_config(&self) -> SearchConfig {
        SearchConfig::new(self.case_sensitive, self.extra_lines)
    }
}

impl From<&Settings> for SearchConfig {
    fn from(settings: &Settings) -> Self {
        settings.search.to_config()
    }
}
