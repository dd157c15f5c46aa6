//! Error types for zele-report

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("missing metric: {field}")]
    MissingMetric { field: &'static str },

    #[error("metric {field} is not finite: {value}")]
    NonFiniteMetric { field: &'static str, value: f64 },

    #[error("consciousness_level label is empty")]
    EmptyLabel,

    #[error("unsupported metrics file format: {0}")]
    UnsupportedFormat(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn missing(field: &'static str) -> Self {
        Self::MissingMetric { field }
    }

    /// Name of the offending metric, for validation errors.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingMetric { field } | Self::NonFiniteMetric { field, .. } => Some(*field),
            Self::EmptyLabel => Some("consciousness_level"),
            _ => None,
        }
    }
}
