//! Error types for the ANN primitives
//!
//! One file per error family; [`AnnError`] wraps them all and is the error
//! type of the crate-level [`crate::Result`].

pub mod config_error;
pub mod index_error;
pub mod core_error;

// Re-export all error types
pub use config_error::*;
pub use index_error::*;
pub use core_error::*;
