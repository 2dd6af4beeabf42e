//! Configuration manager for loading and saving application configuration
//!
//! The configuration lives in `config.json` inside the `PinMap` configuration
//! directory and is written atomically (temp file + rename) to prevent
//! corruption. Only tuning values are stored; pins never outlive the session.

use crate::config::models::AppConfig;
use crate::error::{PinMapError, Result, StringError};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable that overrides the configuration directory
pub const CONFIG_DIR_ENV: &str = "PINMAP_CONFIG_DIR";

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Get the configuration directory
    ///
    /// Resolution order: `$PINMAP_CONFIG_DIR`, `%APPDATA%\PinMap`,
    /// `$XDG_CONFIG_HOME/pinmap`, `$HOME/.config/pinmap`, `./PinMap`.
    pub fn get_config_dir() -> PathBuf {
        let var = |name: &str| std::env::var_os(name).filter(|v| !v.is_empty());

        if let Some(dir) = var(CONFIG_DIR_ENV) {
            return PathBuf::from(dir);
        }
        if let Some(appdata) = var("APPDATA") {
            return PathBuf::from(appdata).join("PinMap");
        }
        if let Some(xdg) = var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("pinmap");
        }
        if let Some(home) = var("HOME") {
            return PathBuf::from(home).join(".config").join("pinmap");
        }
        PathBuf::from(".").join("PinMap")
    }

    /// Get the path to the configuration file
    pub fn get_config_path() -> PathBuf {
        Self::get_config_dir().join("config.json")
    }

    /// Ensure the configuration directory exists
    pub fn ensure_config_dir() -> Result<PathBuf> {
        let config_dir = Self::get_config_dir();
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Load configuration from disk
    ///
    /// A missing file yields the defaults, which are written back so they can
    /// be edited. A corrupt file yields the defaults and is left untouched.
    pub fn load() -> Result<AppConfig> {
        let config_path = Self::get_config_path();

        if !config_path.exists() {
            info!("Configuration file not found, using defaults");
            let config = AppConfig::default();
            if let Err(e) = Self::save(&config) {
                warn!("Failed to write default configuration: {}", e);
            }
            return Ok(config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<AppConfig> {
        let json = std::fs::read_to_string(path)?;

        match serde_json::from_str::<AppConfig>(&json) {
            Ok(mut config) => {
                if config.sanitize() {
                    warn!("Configuration contained invalid sizes, replaced with defaults");
                }
                info!("Configuration loaded successfully");
                Ok(config)
            }
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {}", e);
                Ok(AppConfig::default())
            }
        }
    }

    /// Save configuration to disk with atomic write
    pub fn save(config: &AppConfig) -> Result<()> {
        Self::ensure_config_dir()?;
        Self::save_to(config, &Self::get_config_path())
    }

    /// Save configuration to a specific file with atomic write
    ///
    /// Uses a temporary file and rename to ensure atomic write operation.
    pub fn save_to(config: &AppConfig, path: &Path) -> Result<()> {
        let config_dir = path.parent().ok_or_else(|| {
            PinMapError::ConfigError(StringError::new("Invalid config path"))
        })?;

        let temp_path = config_dir.join("config.json.tmp");
        let json = serde_json::to_string_pretty(config)?;
        std::fs::write(&temp_path, json)?;
        std::fs::rename(temp_path, path)?;

        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}
