//! Attack metrics
//!
//! The five scalars the report interpolates. They arrive from outside
//! (flags, a metrics file, config defaults) as a `MetricsInput` where every
//! field is optional, and become an `AttackMetrics` only after `validate`.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Unvalidated metrics. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ci: Option<f64>,
    #[serde(alias = "level", skip_serializing_if = "Option::is_none")]
    pub consciousness_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coherence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporal_depth: Option<f64>,
}

impl MetricsInput {
    /// Field-wise merge. Values present in `overrides` win.
    pub fn merge(self, overrides: MetricsInput) -> MetricsInput {
        MetricsInput {
            ci: overrides.ci.or(self.ci),
            consciousness_level: overrides.consciousness_level.or(self.consciousness_level),
            integration: overrides.integration.or(self.integration),
            coherence: overrides.coherence.or(self.coherence),
            temporal_depth: overrides.temporal_depth.or(self.temporal_depth),
        }
    }

    /// Check presence and finiteness of every field, in report order.
    /// The first failure is returned.
    pub fn validate(self) -> Result<AttackMetrics> {
        let ci = require_finite("ci", self.ci)?;
        let consciousness_level = self
            .consciousness_level
            .ok_or_else(|| Error::missing("consciousness_level"))?;
        if consciousness_level.trim().is_empty() {
            return Err(Error::EmptyLabel);
        }
        let integration = require_finite("integration", self.integration)?;
        let coherence = require_finite("coherence", self.coherence)?;
        let temporal_depth = require_finite("temporal_depth", self.temporal_depth)?;

        Ok(AttackMetrics {
            ci,
            consciousness_level,
            integration,
            coherence,
            temporal_depth,
        })
    }
}

fn require_finite(field: &'static str, value: Option<f64>) -> Result<f64> {
    let value = value.ok_or_else(|| Error::missing(field))?;
    if !value.is_finite() {
        return Err(Error::NonFiniteMetric { field, value });
    }
    Ok(value)
}

/// Validated metrics, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttackMetrics {
    ci: f64,
    consciousness_level: String,
    integration: f64,
    coherence: f64,
    temporal_depth: f64,
}

impl AttackMetrics {
    pub fn ci(&self) -> f64 {
        self.ci
    }

    pub fn consciousness_level(&self) -> &str {
        &self.consciousness_level
    }

    pub fn integration(&self) -> f64 {
        self.integration
    }

    pub fn coherence(&self) -> f64 {
        self.coherence
    }

    pub fn temporal_depth(&self) -> f64 {
        self.temporal_depth
    }

    /// Numeric metrics that fall outside `[0, 1]`. Accepted, but worth a warning.
    pub fn out_of_unit_range(&self) -> Vec<(&'static str, f64)> {
        [
            ("ci", self.ci),
            ("integration", self.integration),
            ("coherence", self.coherence),
            ("temporal_depth", self.temporal_depth),
        ]
        .into_iter()
        .filter(|(_, v)| !(0.0..=1.0).contains(v))
        .collect()
    }
}
