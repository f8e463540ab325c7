//! # quote-core: Pure Business Logic for Quotations
//!
//! This crate holds the logic behind a sales quotation as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Quotation Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (form UI / quote-cli)              │   │
//! │  │    Customer ──► Line items ──► VAT switch ──► Footer / print    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ quote-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  totals   │  │ thai_text │  │ document  │  │   │
//! │  │   │ LineItem  │  │ subtotal  │  │  บาท/สตางค์ │  │ edits +   │  │   │
//! │  │   │ TaxRate   │  │ VAT 7%    │  │  numerals │  │ summary   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                quote-store (records & config)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Line items, parties, tax rate
//! - [`money`] - Amounts fixed to satang, display formatting
//! - [`totals`] - The totals engine
//! - [`thai_text`] - Amounts read out in Thai
//! - [`document`] - The editable quotation and its footer summary
//! - [`validation`] - Input clamping and field checks
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output, safe to call from any thread
//! 2. **No I/O**: file access lives in quote-store
//! 3. **Round Once**: totals keep full precision, fixing to satang happens
//!    once at display time
//! 4. **Explicit Errors**: typed errors, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use quote_core::{amount_to_thai_text, compute_totals, LineItem};
//!
//! let mut item = LineItem::default();
//! item.quantity = 1.0;
//! item.price_per_unit = 2800.0;
//!
//! let totals = compute_totals(&[item], true);
//! let text = amount_to_thai_text(totals.grand_total).unwrap();
//!
//! assert_eq!(text, "สองพันเก้าร้อยเก้าสิบหกบาทถ้วน");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod document;
pub mod error;
pub mod money;
pub mod thai_text;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use document::{DocumentSummary, ItemEdit, QuotationDocument};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use thai_text::amount_to_thai_text;
pub use totals::{compute_totals, Totals};
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_core_types_are_thread_safe() {
        assert_send_sync::<QuotationDocument>();
        assert_send_sync::<Totals>();
        assert_send_sync::<Money>();
    }

    #[test]
    fn test_concurrent_callers_agree() {
        let handles: Vec<_> = (0..4)
            .map(|_| thread::spawn(|| amount_to_thai_text(1_234_567.89)))
            .collect();

        for handle in handles {
            assert_eq!(
                handle.join().unwrap().unwrap(),
                "หนึ่งล้านสองแสนสามหมื่นสี่พันห้าร้อยหกสิบเจ็ดบาทแปดสิบเก้าสตางค์"
            );
        }
    }
}
