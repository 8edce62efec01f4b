use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{
    catalog::DEFAULT_REFRESH_SECS,
    provider::{DEFAULT_BASE_URL, OpenWeatherProvider, validate_api_key},
    retry::{DEFAULT_MAX_ATTEMPTS, RetryPolicy},
};

/// Environment variable that overrides the stored API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// refresh_interval_secs = 60
/// cities = ["Sydney", "Tokyo"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
    pub retry_backoff_ms: u64,
    pub refresh_interval_secs: u64,
    /// Saved city selection; empty means "use the defaults".
    pub cities: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            retry_backoff_ms: 0,
            refresh_interval_secs: DEFAULT_REFRESH_SECS,
            cities: Vec::new(),
        }
    }
}

impl DashboardConfig {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: DashboardConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-dash", "weather-dash")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Replaces the stored key with `env_key` when one is given and non-blank.
    pub fn with_env_override(mut self, env_key: Option<String>) -> Self {
        if let Some(key) = env_key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty()) {
            self.api_key = Some(key);
        }
        self
    }

    /// Applies [`API_KEY_ENV`] from the process environment.
    pub fn apply_env(self) -> Self {
        let env_key = std::env::var(API_KEY_ENV).ok();
        self.with_env_override(env_key)
    }

    pub fn has_valid_api_key(&self) -> bool {
        validate_api_key(self.api_key.as_deref())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            DEFAULT_MAX_ATTEMPTS,
            Duration::from_millis(self.retry_backoff_ms),
        )
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs.max(1))
    }

    /// Builds the provider described by this config. An absent key is passed
    /// through as empty so the provider reports it as an invalid credential.
    pub fn provider(&self) -> OpenWeatherProvider {
        OpenWeatherProvider::new(self.api_key.clone().unwrap_or_default(), &self.base_url)
            .timeout(self.timeout())
            .retry_policy(self.retry_policy())
    }
}
