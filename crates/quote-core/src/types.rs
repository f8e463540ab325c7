//! # Domain Types
//!
//! Types that make up a quotation document.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │  CustomerInfo   │   │    DocInfo      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  name           │   │  no (QT6301-..) │       │
//! │  │  description    │   │  company        │   │  date           │       │
//! │  │  qty            │   │  address        │   │  payment_terms  │       │
//! │  │  unit           │   │  phone          │   │  credit         │       │
//! │  │  price_per_unit │   │  tax_id         │   └─────────────────┘       │
//! │  │  image          │   └─────────────────┘                              │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │    TaxRate      │   │  CompanyInfo    │                              │
//! │  │  bps (u32)      │   │  (issuer block) │                              │
//! │  │  700 = 7% VAT   │   └─────────────────┘                              │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! Field names on the wire are the ones the form has always saved
//! (`qty`, `pricePerUnit`, `taxId`, ...), so older save files still load.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use ts_rs::TS;
use uuid::Uuid;

use crate::validation::{clamp_total, sanitize_amount};

/// Unit label given to newly added line items.
pub const DEFAULT_UNIT: &str = "หน่วย";

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so Thai VAT at 7% is 700 bps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

/// Thai value-added tax, the only rate a quotation applies.
pub const THAI_VAT: TaxRate = TaxRate::from_bps(700);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a multiplier (700 bps → 0.07).
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.0 as f64 / 10_000.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One row of the quotation.
///
/// Quantity and unit price are kept exactly as entered. Negative or
/// non-numeric values are not rejected here; the totals engine counts them
/// as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Unique identifier, stable for the life of the document.
    pub id: String,

    /// Free text, may span several lines.
    #[serde(default)]
    pub description: String,

    /// Image shown next to the description (data URI or URL).
    #[serde(default)]
    pub image: Option<String>,

    #[serde(rename = "qty", default, deserialize_with = "lenient_number")]
    pub quantity: f64,

    /// Unit label, e.g. ชุด or หน่วย.
    #[serde(default)]
    pub unit: String,

    /// Price per unit in baht.
    #[serde(default, deserialize_with = "lenient_number")]
    pub price_per_unit: f64,
}

impl LineItem {
    /// Creates an empty row: zero quantity and price, blank description.
    pub fn new(unit: impl Into<String>) -> Self {
        LineItem {
            id: Uuid::new_v4().to_string(),
            description: String::new(),
            image: None,
            quantity: 0.0,
            unit: unit.into(),
            price_per_unit: 0.0,
        }
    }

    /// Amount for this row (quantity × unit price).
    ///
    /// Malformed inputs count as zero and an overflowing product saturates
    /// at `f64::MAX`, so this never fails and is always finite and
    /// non-negative.
    pub fn line_total(&self) -> f64 {
        clamp_total(sanitize_amount(self.quantity) * sanitize_amount(self.price_per_unit))
    }
}

impl Default for LineItem {
    fn default() -> Self {
        LineItem::new(DEFAULT_UNIT)
    }
}

/// Accepts numbers, numeric strings and anything else (as 0).
///
/// The form stores whatever the number input held, which may be `""` or
/// `null` after the user clears a field.
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    })
}

// =============================================================================
// Parties & Document Metadata
// =============================================================================

/// Who the quotation is addressed to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerInfo {
    pub name: String,
    pub company: String,
    pub address: String,
    pub phone: String,
    /// 13-digit Thai tax id, may be blank.
    pub tax_id: String,
}

/// Document header fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct DocInfo {
    /// Document number, e.g. `QT6301-002`.
    pub no: String,
    /// Issue date as printed (`4/10/2025`).
    pub date: String,
    pub payment_terms: String,
    pub credit: String,
}

/// The issuing company, printed in the letterhead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub tax_id: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
