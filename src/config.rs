//! Application configuration, read once at startup from a JSON file.

use crate::error::ConfigError;
use crate::risk::TierBoundaries;
use crate::scoring::PiiScoringTable;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_ENV: &str = "PII_EXPOSURE_CONFIG_PATH";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// JSON calibration table; the built-in table when unset
    pub scoring_table_path: Option<PathBuf>,
    /// Risk tier boundaries
    pub risk: RiskConfig,
    /// Privacy tip rotation
    pub tips: TipsConfig,
    /// Remote assessment API
    pub api: ApiConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    pub boundaries: TierBoundaries,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TipsConfig {
    /// Seconds between tips
    pub interval_secs: u64,
    /// Replaces the built-in tips when non-empty
    pub custom: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub enabled: bool,
    /// Base URL, e.g. http://localhost:5757
    pub endpoint: Option<String>,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for TipsConfig {
    fn default() -> Self {
        Self {
            interval_secs: 5,
            custom: Vec::new(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: None,
            timeout_secs: 120,
            connect_timeout_secs: 5,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl AppConfig {
    /// `$PII_EXPOSURE_CONFIG_PATH`, else the user config dir when a file exists there, else
    /// `config.json` in the working directory.
    pub fn default_path() -> PathBuf {
        if let Ok(p) = std::env::var(CONFIG_PATH_ENV) {
            return PathBuf::from(p);
        }
        dirs::config_dir()
            .map(|d| d.join("pii-exposure").join("config.json"))
            .filter(|p| p.exists())
            .unwrap_or_else(|| PathBuf::from("config.json"))
    }

    /// Load from JSON file if present; otherwise return default. A file that exists but does
    /// not parse or validate is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.risk.boundaries.validate()?;
        Ok(config)
    }

    pub fn scoring_table(&self) -> Result<PiiScoringTable, ConfigError> {
        match &self.scoring_table_path {
            Some(path) => PiiScoringTable::load(path),
            None => Ok(PiiScoringTable::builtin()),
        }
    }
}
