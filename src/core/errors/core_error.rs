//! Top-level error type

use serde::{Deserialize, Serialize};
use thiserror::Error;
use super::{ConfigError, IndexError};

/// Main error type for the ANN primitives
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum AnnError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Index error: {0}")]
    Index(#[from] IndexError),
}
