//! Index operation error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by index queries
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum IndexError {
    #[error("Index is empty: {index} has no nodes to search")]
    EmptyIndex { index: String },
}
