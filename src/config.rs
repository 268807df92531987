// Configuration for rostercheck: built-in defaults, optionally overridden by TOML
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::{ConfigError, GameFormat, StrategyKind};

pub const DEFAULT_INSTITUTION_MARKER: &str = "Oregon State University";
pub const DEFAULT_TRACKING_DOMAIN: &str = "imleagues.com";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CheckerConfig {
    pub noise: NoiseConfig,
    pub extraction: ExtractionConfig,
    pub rules: RulesConfig,
}

/// Page furniture repeated on every page of the export
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NoiseConfig {
    pub institution_marker: String,
    pub tracking_domain: String,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            institution_marker: DEFAULT_INSTITUTION_MARKER.to_string(),
            tracking_domain: DEFAULT_TRACKING_DOMAIN.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub strategies: Vec<StrategyKind>,
    pub pdftotext_bin: String,
    pub pdftohtml_bin: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            strategies: StrategyKind::DEFAULT_ORDER.to_vec(),
            pdftotext_bin: "pdftotext".to_string(),
            pdftohtml_bin: "pdftohtml".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RulesConfig {
    pub default_format: GameFormat,
}

impl CheckerConfig {
    /// Load from an explicit path. Unlike `discover`, a missing file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// Explicit path if given, else the per-user config file, else defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// `$CONFIG_DIR/rostercheck/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(env!("CARGO_PKG_NAME")).join(CONFIG_FILE_NAME))
}
