//! Error types for autosession operations.
//!
//! This module defines [`SessionError`], the error type shared by path
//! resolution, the autosave controller, configuration loading and the CLI,
//! and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Controller operations report failures to the user interface and then
//!   return them, so callers observe a `Result` and never a panic
//! - Use `SessionError::Other` (via `anyhow`) for unexpected errors
//! - Messages name the offending path or hook so users can act on them

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for autosession operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No explicit path was given and no `session_filepath` is configured.
    #[error("No session path given and no session_filepath configured")]
    NoPathConfigured,

    /// The resolved path cannot name a session file.
    #[error("Invalid session path ({reason}): {path}")]
    InvalidPath { path: String, reason: &'static str },

    /// Parent directories of the session path could not be created.
    #[error("Failed to create directory {path}: {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The session file to load does not exist or cannot be read.
    #[error("Session file does not exist: {path}")]
    FileNotFound { path: String },

    /// A hook entry is not a recognized command string or callback.
    #[error("Invalid hook in {phase}[{index}]: {message}")]
    InvalidHook {
        phase: String,
        index: usize,
        message: String,
    },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The session store has no command for the requested operation.
    #[error("No {operation} command configured for the session store")]
    StoreNotConfigured { operation: String },

    /// Shell command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// The event source refused a subscription.
    #[error("Failed to subscribe to events [{events}]: {message}")]
    SubscriptionFailed { events: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for autosession operations.
pub type Result<T> = std::result::Result<T, SessionError>;
