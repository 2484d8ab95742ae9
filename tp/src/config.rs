//! Planner configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main planner configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level for the log file, overridden by --log-level
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,

    /// Backend endpoint configuration
    pub api: ApiConfig,

    /// Where the planning catalog comes from
    pub catalog: CatalogConfig,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path)
                .context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .tripplanner.yml
        let local_config = PathBuf::from(".tripplanner.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!(
                        "Failed to load config from {}: {}",
                        local_config.display(),
                        e
                    );
                }
            }
        }

        // Try user config: ~/.config/tripplanner/tripplanner.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("tripplanner").join("tripplanner.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!(
                            "Failed to load config from {}: {}",
                            user_config.display(),
                            e
                        );
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Read just the log level from the config chain
    ///
    /// Runs before logging is initialized, so failures collapse to None;
    /// `load` reports them properly afterwards.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        let path = config_path
            .cloned()
            .or_else(|| {
                let local = PathBuf::from(".tripplanner.yml");
                local.exists().then_some(local)
            })
            .or_else(|| {
                dirs::config_dir()
                    .map(|dir| dir.join("tripplanner").join("tripplanner.yml"))
                    .filter(|path| path.exists())
            })?;
        let content = fs::read_to_string(&path).ok()?;
        let config: Self = serde_yaml::from_str(&content).ok()?;
        config.log_level
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Backend endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the planner backend
    #[serde(rename = "base-url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
        }
    }
}

/// Catalog source configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Embedded tables or the backend's configuration endpoints
    pub source: CatalogSource,
}

/// Catalog source selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSource {
    /// Tables compiled into the binary
    #[default]
    Embedded,
    /// Tables fetched from the backend at startup
    Remote,
}
