//! Error types for gallery operations.
//!
//! This module defines [`GalleryError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Lookup failures (`IndexOutOfRange`, `NotFound`) are reported to the
//!   immediate caller, which decides how to present them
//! - `ConfigurationInvariantViolation` only occurs while building a registry
//!   and means the data set itself is broken
//! - Use `anyhow::Error` (via `GalleryError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gallery operations.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// Index outside `[0, count)`.
    #[error("Example index {index} is out of range (registry holds {count} examples)")]
    IndexOutOfRange { index: i64, count: usize },

    /// No example is registered under this name.
    #[error("Unknown example: {name}")]
    NotFound { name: String },

    /// The data set breaks a registry invariant.
    #[error("Invalid example registry: {message}")]
    ConfigurationInvariantViolation { message: String },

    /// Data set manifest not found at expected location.
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Failed to parse the data set manifest.
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error wrapper.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GalleryError {
    /// Build an `IndexOutOfRange` from a `usize` index.
    pub(crate) fn index_out_of_range(index: usize, count: usize) -> Self {
        Self::IndexOutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            count,
        }
    }

    /// Whether this error means the data set itself is unusable.
    pub fn is_data_set_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigurationInvariantViolation { .. }
                | Self::ManifestNotFound { .. }
                | Self::ManifestParseError { .. }
        )
    }

    /// Shorthand for `ConfigurationInvariantViolation`.
    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        Self::ConfigurationInvariantViolation {
            message: message.into(),
        }
    }
}

/// Result type alias for gallery operations.
pub type Result<T> = std::result::Result<T, GalleryError>;
