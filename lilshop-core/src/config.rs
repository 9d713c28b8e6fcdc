//! Centralized configuration for the lilshop dashboard
//!
//! Loaded from `~/.lilshop/config.toml`, with environment overrides:
//!   LILSHOP_DB    - database URL
//!   LILSHOP_BIND  - server bind address

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::error::{Result, ShopError};

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub database: DatabaseSection,
    #[serde(default)]
    pub assets: AssetsSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    /// Bind address, e.g. "127.0.0.1:3030"
    pub bind: String,
    /// Allow permissive CORS (all origins)
    #[serde(default)]
    pub cors_permissive: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSection {
    /// SQLite database URL, e.g. "sqlite://~/.lilshop/lilshop.db"
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsSection {
    /// Directory holding the dashboard frontend (index.html, app.js, ...)
    pub dir: PathBuf,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3030".to_string(),
            cors_permissive: false,
        }
    }
}

impl Default for DatabaseSection {
    fn default() -> Self {
        let db_file = ShopConfig::home_dir().join("lilshop.db");
        Self {
            url: format!("sqlite://{}", db_file.display()),
        }
    }
}

impl Default for AssetsSection {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("static"),
        }
    }
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            server: ServerSection::default(),
            database: DatabaseSection::default(),
            assets: AssetsSection::default(),
        }
    }
}

impl ShopConfig {
    /// Load config from ~/.lilshop/config.toml
    ///
    /// Fails hard with actionable error if config doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Err(ShopError::ConfigMissing { path: config_path });
        }

        Self::load_from(&config_path)
    }

    /// Load config, falling back to defaults when no file exists.
    ///
    /// A present-but-broken config file is still an error: silently
    /// ignoring it would mask typos.
    pub fn load_or_default() -> Result<Self> {
        let config_path = Self::config_path();
        if !config_path.exists() {
            let mut config = Self::default();
            config.apply_env_overrides();
            return Ok(config);
        }
        Self::load_from(&config_path)
    }

    /// Load config from an explicit path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        let mut config: Self = toml::from_str(&content)
            .map_err(|e| ShopError::config(format!("invalid TOML in {:?}: {}", path, e)))?;

        config.apply_env_overrides();
        Ok(config)
    }

    /// Get config file path: ~/.lilshop/config.toml
    pub fn config_path() -> PathBuf {
        Self::home_dir().join("config.toml")
    }

    /// Get the lilshop home directory: ~/.lilshop
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".lilshop")
    }

    /// Apply LILSHOP_* environment overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = env::var("LILSHOP_DB") {
            self.database.url = url;
        }
        if let Ok(bind) = env::var("LILSHOP_BIND") {
            self.server.bind = bind;
        }
    }

    /// Save config to ~/.lilshop/config.toml
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| ShopError::config(format!("failed to serialize config: {}", e)))?;

        fs::write(&config_path, toml_str)?;

        tracing::info!(path = %config_path.display(), "Config saved");
        Ok(())
    }
}
