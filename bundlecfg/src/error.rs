//! Error types for the bundlecfg library.
//!
//! This module provides the error hierarchy for settings resolution and
//! persistence, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a bundlecfg error.
///
/// # Examples
///
/// ```
/// use bundlecfg::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("vendor/bundle".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the bundlecfg library.
#[derive(Debug, Error)]
pub enum Error {
    /// A scope marker other than `--local`, `--global` or `--delete` was given.
    #[error("Invalid scope --{scope} given. Please use --local or --global.")]
    InvalidScope {
        /// The scope token without its leading dashes.
        scope: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field (or file) that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A settings file could not be serialized or parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The home directory could not be determined.
    #[error("could not determine home directory")]
    HomeDirectoryNotFound,
}

impl Error {
    /// Check if error is a usage error caused by the command arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundlecfg::Error;
    ///
    /// let err = Error::InvalidScope { scope: "system".to_string() };
    /// assert!(err.is_usage_error());
    /// ```
    #[must_use]
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::InvalidScope { .. })
    }
}
