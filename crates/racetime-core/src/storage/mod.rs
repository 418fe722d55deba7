pub mod config;

pub use config::ConfigStorage;

use std::path::PathBuf;

/// Per-user configuration directory, if the platform has one.
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("racetime"))
}
