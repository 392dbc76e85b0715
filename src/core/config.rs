use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::errors::ConfigError;

pub const DEFAULT_MAX_LEVEL: usize = 10;
pub const DEFAULT_LEVEL_INCREASE_PROBABILITY: f64 = 0.5;
pub const DEFAULT_SEED: u64 = 0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnConfig {
    pub skip_list: SkipListConfig,
    pub logging: LoggingConfig,
}

/// Tuning for [`crate::index::SkipList1D`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkipListConfig {
    /// Number of levels every sentinel spans; nodes never rise above it.
    pub max_level: usize,
    /// Chance of promoting a freshly inserted node one level further up.
    pub level_increase_probability: f64,
    /// Seed for the level coin flips. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Fallback filter directive when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for SkipListConfig {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
            level_increase_probability: DEFAULT_LEVEL_INCREASE_PROBABILITY,
            seed: Some(DEFAULT_SEED),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl SkipListConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_level == 0 {
            return Err(ConfigError::invalid("max_level", self.max_level));
        }
        let p = self.level_increase_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::invalid("level_increase_probability", p));
        }
        Ok(())
    }
}

impl AnnConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: AnnConfig =
            toml::from_str(raw).map_err(|e| ConfigError::TomlParseError(e.to_string()))?;
        config.skip_list.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&raw)
    }
}
