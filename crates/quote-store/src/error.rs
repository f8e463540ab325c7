//! # Store Error Types
//!
//! Errors from reading and writing quotation records and config files.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Record files  │  │     Document            │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Io             │  │  Core (validation,      │ │
//! │  │  ConfigLoad     │  │  InvalidRecord  │  │        amounts)         │ │
//! │  │  ConfigSave     │  │  Serialization  │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use quote_core::CoreError;
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store error type.
#[derive(Debug, Error)]
pub enum StoreError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Configuration values that make no sense together.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Record Errors
    // =========================================================================
    /// File system failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File is JSON but not a quotation record.
    #[error("Invalid quotation record {path}: {reason}")]
    InvalidRecord { path: PathBuf, reason: String },

    /// Record could not be written as JSON.
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    // =========================================================================
    // Document Errors
    // =========================================================================
    /// The document itself was rejected by the core.
    #[error(transparent)]
    Core(#[from] CoreError),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::SerializationFailed(err.to_string())
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(err: toml::de::Error) -> Self {
        StoreError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for StoreError {
    fn from(err: toml::ser::Error) -> Self {
        StoreError::ConfigSaveFailed(err.to_string())
    }
}
