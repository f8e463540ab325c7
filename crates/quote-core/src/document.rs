//! # Quotation Document
//!
//! The editable document the form works on: customer, header, line items and
//! the VAT switch.
//!
//! ## Document Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Document Operations                                  │
//! │                                                                         │
//! │  Form Action              Method                  State Change          │
//! │  ───────────              ──────                  ────────────          │
//! │                                                                         │
//! │  Click "add row" ────────► add_item() ──────────► items.push(blank)    │
//! │                                                                         │
//! │  Edit a cell ────────────► update_item() ───────► one field of a row   │
//! │                                                                         │
//! │  Click trash icon ───────► remove_item() ───────► items.retain(..)     │
//! │                                                                         │
//! │  Toggle VAT checkbox ────► set_vat_enabled() ───► enable_vat = b       │
//! │                                                                         │
//! │  Render footer ──────────► summary() ───────────► (read only)          │
//! │                                                                         │
//! │  NOTE: Totals are never stored. summary() recomputes them from the     │
//! │        current rows, so no caller can observe a stale figure.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The serialized form is the flat record the form saves:
//! `{ customer, docInfo, items, enableVat }`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::thai_text;
use crate::totals::{compute_totals, Totals};
use crate::types::{CustomerInfo, DocInfo, LineItem};
use crate::validation::{validate_document_no, validate_tax_id};

// =============================================================================
// Document
// =============================================================================

/// A sales quotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuotationDocument {
    pub customer: CustomerInfo,
    pub doc_info: DocInfo,
    /// Rows in display order.
    pub items: Vec<LineItem>,
    /// Whether 7% VAT is added. Records saved before the switch existed
    /// load with VAT on.
    #[serde(default = "default_enable_vat")]
    pub enable_vat: bool,
}

fn default_enable_vat() -> bool {
    true
}

/// A single-field edit to a line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum ItemEdit {
    Description(String),
    Quantity(f64),
    Unit(String),
    PricePerUnit(f64),
    Image(Option<String>),
}

impl QuotationDocument {
    /// Creates an empty document with VAT enabled.
    pub fn new(doc_info: DocInfo) -> Self {
        QuotationDocument {
            customer: CustomerInfo::default(),
            doc_info,
            items: Vec::new(),
            enable_vat: true,
        }
    }

    /// Appends a blank row and returns its id.
    pub fn add_item(&mut self, unit: &str) -> String {
        let item = LineItem::new(unit);
        let id = item.id.clone();
        self.items.push(item);
        id
    }

    /// Looks up a row by id.
    pub fn item(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Applies one field edit to the row with this id.
    ///
    /// Numbers are stored as given; bad values are clamped only when totals
    /// are computed.
    pub fn update_item(&mut self, id: &str, edit: ItemEdit) -> CoreResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| CoreError::ItemNotFound(id.to_string()))?;

        match edit {
            ItemEdit::Description(text) => item.description = text,
            ItemEdit::Quantity(qty) => item.quantity = qty,
            ItemEdit::Unit(unit) => item.unit = unit,
            ItemEdit::PricePerUnit(price) => item.price_per_unit = price,
            ItemEdit::Image(image) => item.image = image,
        }

        Ok(())
    }

    /// Removes the row with this id.
    pub fn remove_item(&mut self, id: &str) -> CoreResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.id != id);

        if self.items.len() == initial_len {
            Err(CoreError::ItemNotFound(id.to_string()))
        } else {
            Ok(())
        }
    }

    pub fn set_vat_enabled(&mut self, enabled: bool) {
        self.enable_vat = enabled;
    }

    /// Current totals, recomputed on every call.
    pub fn totals(&self) -> Totals {
        compute_totals(&self.items, self.enable_vat)
    }

    /// Everything the footer shows: figures and the amount in Thai words.
    ///
    /// ## Errors
    /// [`CoreError::InvalidAmount`] only if a total is too large to fix to
    /// satang (above 2^53 satang).
    pub fn summary(&self) -> CoreResult<DocumentSummary> {
        let totals = self.totals();
        let grand_total = Money::try_from_amount(totals.grand_total)?;

        Ok(DocumentSummary {
            item_count: self.items.len(),
            subtotal: Money::try_from_amount(totals.subtotal)?.to_string(),
            vat_amount: Money::try_from_amount(totals.vat_amount)?.to_string(),
            grand_total: grand_total.to_string(),
            grand_total_text: thai_text::money_to_thai_text(grand_total)?,
            totals,
        })
    }

    /// Checks the fields that must be sane before the document is saved.
    pub fn validate(&self) -> CoreResult<()> {
        validate_document_no(&self.doc_info.no)?;
        validate_tax_id(&self.customer.tax_id)?;
        Ok(())
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Footer figures for display.
///
/// The formatted strings and `grand_total_text` come from the same satang
/// value, so the words always match the printed total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    pub item_count: usize,
    /// Unrounded figures.
    pub totals: Totals,
    /// `2,800.00`
    pub subtotal: String,
    pub vat_amount: String,
    pub grand_total: String,
    /// `สองพันเก้าร้อยเก้าสิบหกบาทถ้วน`
    pub grand_total_text: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
