use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::constants::timing;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root directory holding <OS>/<version>/Dockerfile build contexts
    #[serde(default = "default_conf_root")]
    pub conf_root: PathBuf,

    /// Root directory holding <scripts-dir>/*.sh fixtures
    #[serde(default = "default_scripts_root")]
    pub scripts_root: PathBuf,

    /// Path to the packaged application copied into the container
    #[serde(default = "default_app_jar")]
    pub app_jar: PathBuf,

    /// One-shot startup check timeout in seconds
    #[serde(default = "default_startup_timeout_secs")]
    pub startup_timeout_secs: u64,

    /// Container liveness poll interval in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Per-architecture JDK download URLs; a non-empty map replaces the
    /// built-in table
    #[serde(default)]
    pub java_download_urls: HashMap<String, String>,
}

fn default_conf_root() -> PathBuf {
    PathBuf::from("resources/conf")
}

fn default_scripts_root() -> PathBuf {
    PathBuf::from("resources/scripts")
}

fn default_app_jar() -> PathBuf {
    PathBuf::from("resources/app.jar")
}

fn default_startup_timeout_secs() -> u64 {
    timing::STARTUP_TIMEOUT_SECS
}

fn default_poll_interval_ms() -> u64 {
    timing::POLL_INTERVAL_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            conf_root: default_conf_root(),
            scripts_root: default_scripts_root(),
            app_jar: default_app_jar(),
            startup_timeout_secs: default_startup_timeout_secs(),
            poll_interval_ms: default_poll_interval_ms(),
            java_download_urls: HashMap::new(),
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("launchtest").join("config.toml");
            if config_path.exists() {
                let content = std::fs::read_to_string(config_path)?;
                let config: Config = toml::from_str(&content)?;
                return Ok(config);
            }
        }
        Ok(Config::default())
    }
}
