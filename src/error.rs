//! Error types for gather operations.
//!
//! This module defines [`GatherError`], the error type returned by
//! collection, configuration loading and the command-line entry point,
//! and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Registration never fails; collisions are only reported by
//!   [`Collector::collect_with`](crate::Collector::collect_with)
//! - Handler errors pass through the dispatcher untouched
//! - Use `anyhow::Error` (via `GatherError::Other`) for handler failures

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gather operations.
#[derive(Debug, Error)]
pub enum GatherError {
    /// More than one plugin is registered under a name that allows exactly one.
    #[error("Name collision for '{name}': {count} plugins registered, expected exactly one")]
    Collision { name: String, count: usize },

    /// Configuration file not found at the requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for gather operations.
pub type Result<T> = std::result::Result<T, GatherError>;
