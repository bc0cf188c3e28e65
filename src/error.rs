//! Error types for tddcheck operations.
//!
//! This module defines [`TddCheckError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Expected absences (a tool or service is missing) are not errors: the
//!   owning check reports them and returns `Ok(false)`
//! - Anything a check did not anticipate is returned as a `TddCheckError`
//!   and converted to a failed result by the runner
//! - All errors should carry enough context to be shown to the user as-is

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for tddcheck operations.
#[derive(Debug, Error)]
pub enum TddCheckError {
    /// Settings file not found at the given location.
    #[error("Settings not found: {path}")]
    SettingsNotFound { path: PathBuf },

    /// Failed to parse a settings file.
    #[error("Failed to parse settings at {path}: {message}")]
    SettingsParseError { path: PathBuf, message: String },

    /// An external command could not be started at all.
    #[error("Could not run '{command}': {message}")]
    CommandNotStarted { command: String, message: String },

    /// The interpreter answered a probe with something we could not read.
    #[error("Unexpected output from {program}: {message}")]
    MalformedProbeOutput { program: String, message: String },

    /// A network service refused, dropped, or rejected the connection.
    #[error("connecting to {address}: {message}")]
    ServiceUnavailable {
        service: String,
        address: String,
        message: String,
    },

    /// A check panicked instead of returning a result.
    #[error("check panicked: {message}")]
    CheckPanicked { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for tddcheck operations.
pub type Result<T> = std::result::Result<T, TddCheckError>;
