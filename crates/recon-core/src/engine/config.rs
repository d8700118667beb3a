use crate::core::interpolation::Interpolation;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// What to do with a query energy outside the tabulated grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RangePolicy {
    /// Fail with `OutOfRangeEnergy`.
    #[default]
    Reject,
    /// Evaluate at the nearest grid edge.
    Clamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct EvaluationConfig {
    pub range_policy: RangePolicy,
    /// Scheme for blending tabulated densities across incident energy.
    /// Legendre coefficients are always blended linearly.
    pub energy_interpolation: Interpolation,
}

impl EvaluationConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::Toml { source, .. } => ConfigError::Toml {
                path: path.to_string_lossy().to_string(),
                source,
            },
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Toml {
            path: "<inline>".to_string(),
            source: e,
        })
    }
}

#[derive(Default)]
pub struct EvaluationConfigBuilder {
    range_policy: Option<RangePolicy>,
    energy_interpolation: Option<Interpolation>,
}

impl EvaluationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn range_policy(mut self, policy: RangePolicy) -> Self {
        self.range_policy = Some(policy);
        self
    }
    pub fn energy_interpolation(mut self, scheme: Interpolation) -> Self {
        self.energy_interpolation = Some(scheme);
        self
    }

    pub fn build(self) -> EvaluationConfig {
        EvaluationConfig {
            range_policy: self.range_policy.unwrap_or_default(),
            energy_interpolation: self.energy_interpolation.unwrap_or_default(),
        }
    }
}
