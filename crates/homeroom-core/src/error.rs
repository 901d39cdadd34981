//! Core error types for homeroom-core.
//!
//! The only fallible boundaries in the engine are validation at creation
//! time and storage/config I/O; everything else is pure computation.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for homeroom-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors raised by the assignment factory
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Validation errors raised when building an assignment record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Title was empty after trimming
    #[error("assignment title must not be empty")]
    EmptyTitle,

    /// No due date was supplied
    #[error("assignment due date is required")]
    MissingDueDate,

    /// Due date string did not match any accepted format
    #[error("cannot parse '{value}' as a due date")]
    UnparsableDueDate { value: String },

    /// Estimated hours must be a finite positive number when present
    #[error("estimated hours must be a positive number, got {value}")]
    InvalidEstimate { value: f64 },
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Data directory could not be resolved or created
    #[error("Failed to resolve data directory: {0}")]
    DataDir(String),

    /// Writing the assignment collection failed
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing the assignment collection failed
    #[error("Failed to serialize assignment collection: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist in the configuration tree
    #[error("unknown configuration key: {0}")]
    UnknownKey(String),

    /// Value cannot be parsed into the key's type
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
