//! Service ports: traits + data contracts.

pub mod config;
pub mod host;
pub mod settings;

pub use config::{SearchConfig, MAX_MARGIN_LINES};
pub use host::{Caret, SnapshotProvider, WordResolver};
pub use settings::{Result as SettingsResult, SearchSettings, Settings, SettingsError};
