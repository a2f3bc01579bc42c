//! Error types for the Umbra library.
//!
//! All errors are represented by the [`UmbraError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use umbra::error::{Result, UmbraError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(UmbraError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Umbra operations.
///
/// This enum represents all possible errors that can occur in the Umbra
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum UmbraError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, vectorization, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Classification-related errors (training, prediction, etc.)
    #[error("Classification error: {0}")]
    Classification(String),

    /// A capability (vectorizer or classifier) violated its contract,
    /// e.g. returned a result container with the wrong number of elements.
    #[error("Capability contract violation: {0}")]
    Contract(String),

    /// A classifier returned a label outside the known label set.
    #[error("Unrecognized label: {0}")]
    UnknownLabel(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with UmbraError.
pub type Result<T> = std::result::Result<T, UmbraError>;

impl UmbraError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        UmbraError::Analysis(msg.into())
    }

    /// Create a new classification error.
    pub fn classification<S: Into<String>>(msg: S) -> Self {
        UmbraError::Classification(msg.into())
    }

    /// Create a new capability contract violation error.
    pub fn contract<S: Into<String>>(msg: S) -> Self {
        UmbraError::Contract(msg.into())
    }

    /// Create a new unrecognized label error.
    pub fn unknown_label<S: Into<String>>(label: S) -> Self {
        UmbraError::UnknownLabel(label.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        UmbraError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        UmbraError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        UmbraError::Other(format!("Internal error: {}", msg.into()))
    }
}
