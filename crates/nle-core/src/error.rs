//! Error types for NLE controls.

use thiserror::Error;

use crate::host::DisplaySlot;

/// Main error type for NLE control operations.
#[derive(Error, Debug)]
pub enum NleError {
    #[error("Invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    #[error("Display target not found: {0}")]
    MissingDisplay(DisplaySlot),
}

/// Result type alias for NLE control operations.
pub type Result<T> = std::result::Result<T, NleError>;
