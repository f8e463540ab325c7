//! # Command Handlers
//!
//! One handler per subcommand. Each loads the record, applies a single
//! change through `quote-core`, saves, and returns the text to print.
//! A change is saved only when the resulting document still summarizes and
//! validates, so a failed command leaves the record on disk untouched.
//!
//! ```text
//! quote add-item QT-1 --qty 2 --price 150
//!      │
//!      ▼
//! store.load_by_no("QT-1") ──► doc.add_item() + update_item()
//!      │
//!      ▼
//! doc.summary()?  ──► store.save()  ──► render_summary()
//! ```

use quote_core::{amount_to_thai_text, CustomerInfo, DocInfo, ItemEdit, QuotationDocument};
use quote_store::{DocumentStore, QuoteConfig};
use tracing::{info, warn};

use crate::error::{CliError, CliResult};
use crate::render::{render_document, render_summary};

/// Shown in `list` in place of a total.
pub const LIST_ERROR_MARKER: &str = "!error";

/// Loaded configuration plus the store it points at.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: QuoteConfig,
    pub store: DocumentStore,
}

impl Context {
    pub fn new(config: QuoteConfig) -> Self {
        let store = DocumentStore::new(config.data_dir());
        Context { config, store }
    }
}

/// Field values for a row; unset fields are left alone.
#[derive(Debug, Clone, Default)]
pub struct ItemFields {
    pub description: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub price_per_unit: Option<f64>,
    pub image: Option<String>,
}

impl ItemFields {
    fn into_edits(self) -> Vec<ItemEdit> {
        let mut edits = Vec::new();
        if let Some(text) = self.description {
            edits.push(ItemEdit::Description(text));
        }
        if let Some(qty) = self.quantity {
            edits.push(ItemEdit::Quantity(qty));
        }
        if let Some(unit) = self.unit {
            edits.push(ItemEdit::Unit(unit));
        }
        if let Some(price) = self.price_per_unit {
            edits.push(ItemEdit::PricePerUnit(price));
        }
        if let Some(image) = self.image {
            let image = (!image.is_empty()).then_some(image);
            edits.push(ItemEdit::Image(image));
        }
        edits
    }
}

/// Customer fields to overwrite; unset fields are left alone.
#[derive(Debug, Clone, Default)]
pub struct CustomerFields {
    pub name: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub tax_id: Option<String>,
}

impl CustomerFields {
    fn apply(self, customer: &mut CustomerInfo) {
        if let Some(name) = self.name {
            customer.name = name;
        }
        if let Some(company) = self.company {
            customer.company = company;
        }
        if let Some(address) = self.address {
            customer.address = address;
        }
        if let Some(phone) = self.phone {
            customer.phone = phone;
        }
        if let Some(tax_id) = self.tax_id {
            customer.tax_id = tax_id;
        }
    }
}

/// Header fields to overwrite. The document number is the record's key and
/// cannot be changed here.
#[derive(Debug, Clone, Default)]
pub struct DocFields {
    pub date: Option<String>,
    pub payment_terms: Option<String>,
    pub credit: Option<String>,
}

impl DocFields {
    fn apply(self, doc_info: &mut DocInfo) {
        if let Some(date) = self.date {
            doc_info.date = date;
        }
        if let Some(terms) = self.payment_terms {
            doc_info.payment_terms = terms;
        }
        if let Some(credit) = self.credit {
            doc_info.credit = credit;
        }
    }
}

/// Creates and saves an empty quotation.
pub fn new_document(
    ctx: &Context,
    no: &str,
    date: String,
    customer_name: Option<String>,
    customer_company: Option<String>,
) -> CliResult<String> {
    let mut doc = QuotationDocument::new(DocInfo {
        no: no.trim().to_string(),
        date,
        ..DocInfo::default()
    });
    doc.set_vat_enabled(ctx.config.document.vat_enabled);
    if let Some(name) = customer_name {
        doc.customer.name = name;
    }
    if let Some(company) = customer_company {
        doc.customer.company = company;
    }

    if ctx.store.path_for(&doc).exists() {
        return Err(CliError::AlreadyExists(doc.doc_info.no));
    }

    let path = ctx.store.save(&doc)?;
    info!(?path, "Created quotation");
    Ok(format!("Created {}\n", path.display()))
}

/// Appends a row, filling in whichever fields were given.
pub fn add_item(ctx: &Context, no: &str, fields: ItemFields) -> CliResult<String> {
    let mut doc = ctx.store.load_by_no(no)?;
    let id = doc.add_item(&ctx.config.document.default_unit);
    for edit in fields.into_edits() {
        doc.update_item(&id, edit)?;
    }

    save_and_summarize(ctx, &doc, Some(format!("Added item {}\n", id)))
}

/// Edits an existing row.
pub fn set_item(ctx: &Context, no: &str, id: &str, fields: ItemFields) -> CliResult<String> {
    let mut doc = ctx.store.load_by_no(no)?;
    for edit in fields.into_edits() {
        doc.update_item(id, edit)?;
    }

    save_and_summarize(ctx, &doc, None)
}

pub fn remove_item(ctx: &Context, no: &str, id: &str) -> CliResult<String> {
    let mut doc = ctx.store.load_by_no(no)?;
    doc.remove_item(id)?;

    save_and_summarize(ctx, &doc, Some(format!("Removed item {}\n", id)))
}

pub fn set_vat(ctx: &Context, no: &str, enabled: bool) -> CliResult<String> {
    let mut doc = ctx.store.load_by_no(no)?;
    doc.set_vat_enabled(enabled);

    save_and_summarize(ctx, &doc, None)
}

pub fn set_customer(ctx: &Context, no: &str, fields: CustomerFields) -> CliResult<String> {
    let mut doc = ctx.store.load_by_no(no)?;
    fields.apply(&mut doc.customer);

    save_and_summarize(ctx, &doc, None)
}

pub fn set_doc(ctx: &Context, no: &str, fields: DocFields) -> CliResult<String> {
    let mut doc = ctx.store.load_by_no(no)?;
    fields.apply(&mut doc.doc_info);

    save_and_summarize(ctx, &doc, None)
}

pub fn show(ctx: &Context, no: &str) -> CliResult<String> {
    let doc = ctx.store.load_by_no(no)?;
    render_document(&doc, &ctx.config.company)
}

/// One line per saved quotation: number, date, grand total.
///
/// A record that cannot be read or totalled gets an error row; the rest are
/// still listed.
pub fn list(ctx: &Context) -> CliResult<String> {
    let mut out = String::new();
    for path in ctx.store.list()? {
        let row = match ctx.store.load(&path) {
            Ok(doc) => match doc.summary() {
                Ok(summary) => format!(
                    "{:<20} {:<12} {:>16}",
                    doc.doc_info.no, doc.doc_info.date, summary.grand_total
                ),
                Err(e) => {
                    warn!(?path, error = %e, "Cannot total quotation");
                    format!(
                        "{:<20} {:<12} {:>16}  {}",
                        doc.doc_info.no, doc.doc_info.date, LIST_ERROR_MARKER, e
                    )
                }
            },
            Err(e) => {
                warn!(?path, error = %e, "Cannot read quotation");
                let name = path.file_name().map(|n| n.to_string_lossy().into_owned());
                format!(
                    "{:<33} {:>16}  {}",
                    name.unwrap_or_default(),
                    LIST_ERROR_MARKER,
                    e
                )
            }
        };
        out.push_str(&row);
        out.push('\n');
    }
    Ok(out)
}

pub fn baht_text(amount: f64) -> CliResult<String> {
    Ok(format!("{}\n", amount_to_thai_text(amount)?))
}

/// Summarizes first and saves only if that succeeds.
fn save_and_summarize(
    ctx: &Context,
    doc: &QuotationDocument,
    header: Option<String>,
) -> CliResult<String> {
    let summary = doc.summary()?;
    ctx.store.save(doc)?;

    let mut out = header.unwrap_or_default();
    out.push_str(&render_summary(&summary, doc.enable_vat));
    Ok(out)
}
