//! Service adapters: OS specific implementations (paths, settings files).

pub mod paths;
pub mod settings;

pub use paths::{ensure_log_dir, get_log_dir, APP_NAME};
pub use settings::{
    get_settings_path, load_or_init_settings, load_settings, load_settings_from,
    write_default_settings,
};
