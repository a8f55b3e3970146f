//! Configuration management
//!
//! Settings are read from a TOML file (by default
//! `~/.config/taskflow/config.toml`) and can be overridden from the command
//! line. A missing file means defaults; a malformed file is an error.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! workers = 8
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::paths;

/// Top-level taskflow configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind (0 picks a free port)
    #[serde(default = "default_port")]
    pub port: u16,
    /// Number of worker threads
    #[serde(default = "default_workers")]
    pub workers: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3000
}

const fn default_workers() -> usize {
    4
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Overrides taken from the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Interface to bind
    pub host: Option<String>,
    /// Port to bind
    pub port: Option<u16>,
    /// Worker thread count
    pub workers: Option<usize>,
}

impl AppConfig {
    /// Load config from `path`, or from the default location when `None`
    ///
    /// An explicitly given path must exist; a missing default file yields
    /// the defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load_file(path),
            None => {
                let default_path = paths::config_file();
                if default_path.exists() {
                    Self::load_file(&default_path)
                } else {
                    log::debug!("No config at {}, using defaults", default_path.display());
                    Ok(Self::default())
                }
            },
        }
    }

    /// Load and parse a specific config file
    pub fn load_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply command-line overrides on top of file values
    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(host) = overrides.host {
            self.server.host = host;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(workers) = overrides.workers {
            self.server.workers = workers;
        }
        self
    }
}
