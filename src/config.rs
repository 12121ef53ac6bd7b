use crate::api::API_HEROES;
use crate::retry::RetryPolicy;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Retry parameters (`[retry]` section of config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Wait before retry n is `base_delay_ms * n`.
    pub base_delay_ms: u64,
    /// Deadline for a single attempt.
    pub timeout_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        let p = RetryPolicy::default();
        Self {
            max_retries: p.max_retries,
            base_delay_ms: p.base_delay.as_millis() as u64,
            timeout_ms: p.timeout.as_millis() as u64,
        }
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(c: &RetryConfig) -> Self {
        Self {
            max_retries: c.max_retries,
            base_delay: Duration::from_millis(c.base_delay_ms),
            timeout: Duration::from_millis(c.timeout_ms),
        }
    }
}

/// Configuration loaded from `~/.config/mlbb-stats/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hero statistics endpoint.
    pub endpoint: String,
    pub retry: RetryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: API_HEROES.to_string(),
            retry: RetryConfig::default(),
        }
    }
}

impl Config {
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy::from(&self.retry)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mlbb-stats")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load the config at `path`, writing the defaults there if it is missing.
pub fn load_or_init_at(path: &Path) -> Result<Config> {
    if !path.exists() {
        let cfg = Config::default();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(&cfg)?)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(cfg);
    }
    let data = fs::read_to_string(path)?;
    Ok(toml::from_str(&data)?)
}

pub fn load_or_init() -> Result<Config> {
    load_or_init_at(&config_path()?)
}
