//! # Error Types
//!
//! Domain-specific error types for quote-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  quote-core errors (this file)                                         │
//! │  ├── CoreError        - Transliteration and document errors            │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  quote-store errors (separate crate)                                   │
//! │  └── StoreError       - Record file failures                           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → CliError → Terminal  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Malformed quantities and prices never show up here: the totals engine
//! clamps them to zero instead of failing.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// Amount cannot be read out as Thai text.
    ///
    /// ## When This Occurs
    /// - Negative amount (anything that does not round to 0 satang)
    /// - NaN or infinity
    /// - Magnitude too large to hold as an exact satang count
    ///
    /// Totals produced by [`crate::totals::compute_totals`] never trigger it.
    #[error("Invalid amount {amount}: {reason}")]
    InvalidAmount { amount: f64, reason: String },

    /// No line item with this id in the document.
    #[error("Line item not found: {0}")]
    ItemNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., a tax id with letters in it).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
