use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::origin::OriginPair;
use crate::resolver::AssetResolver;

/// Environment variable that overrides `api_origin` at process start.
pub const API_ORIGIN_ENV: &str = "ASSETREF_API_ORIGIN";

const DEFAULT_API_ORIGIN: &str = "http://localhost:8000/api";

/// Global configuration loaded from `~/.config/assetref/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Base URL of the REST API, including its `/api` mount if it has one.
    /// The asset origin is derived from it.
    pub api_origin: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            api_origin: DEFAULT_API_ORIGIN.to_string(),
        }
    }
}

impl AssetConfig {
    /// Replaces `api_origin` with the value of [`API_ORIGIN_ENV`] if `lookup`
    /// yields a non-blank one.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(API_ORIGIN_ENV).filter(|v| !v.trim().is_empty()) {
            tracing::debug!("api_origin overridden by {}: {}", API_ORIGIN_ENV, v);
            self.api_origin = v;
        }
    }

    /// Validated origin pair for this configuration.
    pub fn origins(&self) -> Result<OriginPair, ConfigError> {
        OriginPair::from_api_origin(&self.api_origin)
    }

    /// Resolver bound to this configuration's origins.
    pub fn resolver(&self) -> Result<AssetResolver, ConfigError> {
        Ok(AssetResolver::new(self.origins()?))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("assetref")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
/// The environment override is applied on top.
pub fn load_or_init() -> Result<AssetConfig> {
    let path = config_path()?;
    let mut cfg = if path.exists() {
        load_from(&path)?
    } else {
        let default_cfg = AssetConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)
            .with_context(|| format!("writing default config to {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        default_cfg
    };
    cfg.apply_env_overrides(|k| std::env::var(k).ok());
    Ok(cfg)
}

/// Load configuration from an explicit file (no environment override).
pub fn load_from(path: &Path) -> Result<AssetConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: AssetConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    tracing::debug!("loaded config from {}: {:?}", path.display(), cfg);
    Ok(cfg)
}
