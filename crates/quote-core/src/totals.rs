//! # Totals Engine
//!
//! Turns the line items and the VAT switch into subtotal, VAT and grand
//! total.
//!
//! ## User Workflow
//! ```text
//! Edit qty / price / VAT checkbox
//!      │
//!      ▼
//! compute_totals(items, vat_enabled) ← THIS MODULE
//!      │
//!      ├──► subtotal, vat, grand total (printed with 2 decimals)
//!      │
//!      └──► grand_total (unrounded) ──► amount_to_thai_text()
//! ```
//!
//! Nothing is rounded here. Figures keep full `f64` precision; fixing to
//! satang happens once, at display or transliteration time.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{LineItem, THAI_VAT};
use crate::validation::clamp_total;

/// Derived figures for a quotation. Always recomputed, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub subtotal: f64,
    pub vat_amount: f64,
    pub grand_total: f64,
}

/// Computes the totals for `items`.
///
/// - `subtotal` is the sum of every [`LineItem::line_total`], in list order
/// - `vat_amount` is 7% of the subtotal when `vat_enabled`, else 0
/// - `grand_total` is `subtotal + vat_amount`
///
/// Malformed quantities or prices contribute 0, and a sum that would
/// overflow saturates at `f64::MAX`. This function cannot fail and every
/// figure it returns is finite and non-negative.
///
/// ## Example
/// ```rust
/// use quote_core::totals::compute_totals;
/// use quote_core::types::LineItem;
///
/// let mut item = LineItem::default();
/// item.quantity = 1.0;
/// item.price_per_unit = 2800.0;
///
/// let totals = compute_totals(&[item], true);
/// assert_eq!(totals.subtotal, 2800.0);
/// assert!((totals.vat_amount - 196.0).abs() < 1e-9);
/// ```
pub fn compute_totals(items: &[LineItem], vat_enabled: bool) -> Totals {
    // start from +0.0 so an empty list totals 0, not -0
    let subtotal = items
        .iter()
        .map(LineItem::line_total)
        .fold(0.0, |acc, line| clamp_total(acc + line));

    let vat_amount = if vat_enabled {
        clamp_total(subtotal * THAI_VAT.fraction())
    } else {
        0.0
    };

    Totals {
        subtotal,
        vat_amount,
        grand_total: clamp_total(subtotal + vat_amount),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
