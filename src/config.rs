//! Report configuration
//!
//! Loaded from TOML at startup. The implicit `./zele-report.toml` falls back
//! to defaults if it is absent or fails to parse; a path given explicitly
//! must load.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use zele_report_core::{MetricsInput, Result};

pub const DEFAULT_CONFIG_PATH: &str = "zele-report.toml";

/// Top-level report configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Default metric values, used where neither flags nor a metrics file supply one.
    pub metrics: MetricsInput,
    /// Where and how the report is written.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Write to this file instead of stdout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The narrative report with completion banner.
    #[default]
    Text,
    /// Validated metrics as pretty JSON.
    Json,
}

impl ReportConfig {
    /// Load config from a TOML file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {} - using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                tracing::info!("No config at {} - using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Load config from a TOML file. Missing or malformed files are errors.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// The current config as TOML (for generating a default config file).
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}
