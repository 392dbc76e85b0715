//! Configuration-related error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum ConfigError {
    #[error("Invalid configuration value: {field} = {value}")]
    InvalidValue { field: String, value: String },

    #[error("TOML parsing error: {0}")]
    TomlParseError(String),

    #[error("Failed to read configuration file {path}: {reason}")]
    Io { path: String, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &str, value: impl ToString) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}
