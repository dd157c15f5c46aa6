//! Metrics files
//!
//! A metrics file holds any subset of the five metrics, as JSON or TOML.
//! The format is chosen by file extension.

use std::path::Path;

use crate::error::{Error, Result};
use crate::metrics::MetricsInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricsFormat {
    Json,
    Toml,
}

impl MetricsFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }
}

pub fn parse_metrics(content: &str, format: MetricsFormat) -> Result<MetricsInput> {
    match format {
        MetricsFormat::Json => Ok(serde_json::from_str(content)?),
        MetricsFormat::Toml => Ok(toml::from_str(content)?),
    }
}

/// Read and parse a metrics file. Fields absent from the file stay `None`.
pub fn load_metrics(path: &Path) -> Result<MetricsInput> {
    let format = MetricsFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    parse_metrics(&content, format)
}
