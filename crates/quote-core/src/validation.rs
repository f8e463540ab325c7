//! # Validation Module
//!
//! Input checks for quotation fields.
//!
//! ## Two Kinds of Checks
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Numbers (qty, price)        Text (document no, tax id)                │
//! │  ────────────────────        ──────────────────────────                │
//! │  sanitize_amount()           validate_*() → ValidationError            │
//! │  never fails, clamps to 0    used before a document is saved           │
//! │                                                                         │
//! │  The totals must always be computable, whatever the user typed.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest document number accepted (it also becomes part of a file name).
pub const MAX_DOCUMENT_NO_LEN: usize = 50;

/// Length of a Thai taxpayer identification number.
pub const TAX_ID_LEN: usize = 13;

// =============================================================================
// Numeric Sanitising
// =============================================================================

/// Clamps a quantity or price to something the totals can use.
///
/// NaN, infinities and negative values become `0.0`.
///
/// ## Example
/// ```rust
/// use quote_core::validation::sanitize_amount;
///
/// assert_eq!(sanitize_amount(12.5), 12.5);
/// assert_eq!(sanitize_amount(-3.0), 0.0);
/// assert_eq!(sanitize_amount(f64::NAN), 0.0);
/// ```
#[inline]
pub fn sanitize_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Keeps a product or sum of sanitised amounts finite.
///
/// Overflow saturates at `f64::MAX` instead of reaching infinity, so an
/// oversized quotation still has a finite total (which then fails to fix to
/// satang with a clear error). NaN and non-positive values become `0.0`.
///
/// ## Example
/// ```rust
/// use quote_core::validation::clamp_total;
///
/// assert_eq!(clamp_total(1e200 * 1e200), f64::MAX);
/// assert_eq!(clamp_total(f64::NAN), 0.0);
/// assert_eq!(clamp_total(42.5), 42.5);
/// ```
#[inline]
pub fn clamp_total(value: f64) -> f64 {
    if value > 0.0 {
        value.min(f64::MAX)
    } else {
        0.0
    }
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a document number such as `QT6301-002`.
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - No path separators or control characters
pub fn validate_document_no(no: &str) -> ValidationResult<()> {
    let no = no.trim();

    if no.is_empty() {
        return Err(ValidationError::Required {
            field: "document number".to_string(),
        });
    }

    if no.chars().count() > MAX_DOCUMENT_NO_LEN {
        return Err(ValidationError::TooLong {
            field: "document number".to_string(),
            max: MAX_DOCUMENT_NO_LEN,
        });
    }

    if no
        .chars()
        .any(|c| c == '/' || c == '\\' || c.is_control())
    {
        return Err(ValidationError::InvalidFormat {
            field: "document number".to_string(),
            reason: "must not contain slashes or control characters".to_string(),
        });
    }

    Ok(())
}

/// Validates a Thai tax id. Blank is allowed (private customers).
///
/// Dashes and spaces are ignored, so `0-1055-51234-56-7` is accepted.
pub fn validate_tax_id(tax_id: &str) -> ValidationResult<()> {
    let digits: String = tax_id
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect();

    if digits.is_empty() {
        return Ok(());
    }

    if digits.len() != TAX_ID_LEN || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "tax id".to_string(),
            reason: format!("must be {} digits", TAX_ID_LEN),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
