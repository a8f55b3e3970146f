//! Centralized path definitions for taskflow
//!
//! ```text
//! $XDG_CONFIG_HOME/taskflow/      (~/.config/taskflow on Linux)
//! └── config.toml                 # Server settings
//! ```

use std::path::PathBuf;

/// Config directory name
const CONFIG_DIR: &str = "taskflow";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Get the taskflow config directory.
///
/// Falls back to `./.taskflow` when the platform has no config directory.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir().map_or_else(|| PathBuf::from(".taskflow"), |dir| dir.join(CONFIG_DIR))
}

/// Get the default config file path.
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}
