//! Error types for the spellwise library.
//!
//! All fallible operations return [`SpellwiseError`]. The suggestion search
//! itself never fails; errors come from configuration (bad costs or bounds)
//! and from loading word lists.
//!
//! # Examples
//!
//! ```
//! use spellwise::error::{Result, SpellwiseError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpellwiseError::invalid_config("group_cost must be positive"))
//! }
//!
//! assert!(example_operation().is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for spellwise operations.
#[derive(Error, Debug)]
pub enum SpellwiseError {
    /// I/O errors (reading word lists, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid configuration (costs, distance bounds)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid argument passed to an operation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SpellwiseError.
pub type Result<T> = std::result::Result<T, SpellwiseError>;

impl SpellwiseError {
    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SpellwiseError::InvalidConfig(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SpellwiseError::InvalidArgument(msg.into())
    }
}
