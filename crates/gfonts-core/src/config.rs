use crate::catalog::ApiSettings;
use crate::installer::DownloadSettings;
use crate::paths;
use crate::retry::RetryPolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Retry parameters for font downloads (`[retry]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of attempts per font file (including the first).
    pub max_attempts: u32,
    /// Fixed delay in seconds between attempts.
    pub delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay_secs: 2,
        }
    }
}

impl RetryConfig {
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts.max(1), Duration::from_secs(self.delay_secs))
    }
}

/// Global configuration loaded from `~/.config/gfonts/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GfontsConfig {
    /// Root of the repository contents API.
    pub api_base: String,
    /// Catalog directory inside the repository (one sub-directory per family).
    pub collection: String,
    /// Git ref used when building a family listing URL from its name (`--force`).
    pub git_ref: String,
    /// Access token sent as `Authorization: token <value>`.
    pub token: Option<String>,
    /// Overrides the platform fonts directory.
    pub install_dir: Option<PathBuf>,
    /// Connect timeout (and stalled-read limit) in seconds for every request.
    pub connect_timeout_secs: u64,
    pub retry: RetryConfig,
}

impl Default for GfontsConfig {
    fn default() -> Self {
        let api = ApiSettings::default();
        Self {
            api_base: api.api_base,
            collection: api.collection,
            git_ref: api.git_ref,
            token: None,
            install_dir: None,
            connect_timeout_secs: 10,
            retry: RetryConfig::default(),
        }
    }
}

impl GfontsConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings {
            api_base: self.api_base.clone(),
            collection: self.collection.clone(),
            git_ref: self.git_ref.clone(),
            connect_timeout: self.connect_timeout(),
        }
    }

    pub fn download_settings(&self) -> DownloadSettings {
        DownloadSettings {
            retry: self.retry.policy(),
            connect_timeout: self.connect_timeout(),
        }
    }

    /// Picks the token to use: an explicit one (flag or `ACCESS_TOKEN`) wins
    /// over the stored one. Blank values count as unset.
    pub fn resolve_token(&self, explicit: Option<String>) -> Option<String> {
        explicit
            .filter(|t| !t.trim().is_empty())
            .or_else(|| self.token.clone().filter(|t| !t.trim().is_empty()))
    }
}

pub fn config_path() -> Result<PathBuf> {
    paths::config_file()
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GfontsConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = GfontsConfig::default();
        save_to(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<GfontsConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: GfontsConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

pub fn save_to(path: &Path, cfg: &GfontsConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml).with_context(|| format!("failed to write config {}", path.display()))?;
    Ok(())
}
