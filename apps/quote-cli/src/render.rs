//! Plain-text rendering of a quotation for the terminal.
//!
//! ```text
//! Example Co.                               ใบเสนอราคา / QUOTATION
//! No. QT6301-002   Date 4/10/2025
//! Customer: คุณสุเทพ, SEWS-COMPONENTS.,Ltd.
//!
//!   #  Description                   Qty  Unit     Price        Amount
//!   1  ชั้นวางชิ้นงาน พร้อมทำสี          1  ชุด    2,800.00      2,800.00
//!
//!                                         Subtotal      2,800.00
//!                                          VAT 7%         196.00
//!                                     Grand total       2,996.00
//! (สองพันเก้าร้อยเก้าสิบหกบาทถ้วน)
//! ```

use quote_core::types::{CompanyInfo, THAI_VAT};
use quote_core::validation::sanitize_amount;
use quote_core::{DocumentSummary, Money, QuotationDocument};

use crate::error::CliResult;

/// Full document: header, rows and footer.
pub fn render_document(doc: &QuotationDocument, company: &CompanyInfo) -> CliResult<String> {
    let mut out = String::new();

    if !company.name.is_empty() {
        out.push_str(&format!("{}\n", company.name));
    }
    out.push_str("ใบเสนอราคา / QUOTATION\n");
    out.push_str(&format!(
        "No. {}   Date {}\n",
        doc.doc_info.no, doc.doc_info.date
    ));

    let customer = &doc.customer;
    let who: Vec<&str> = [customer.name.as_str(), customer.company.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    if !who.is_empty() {
        out.push_str(&format!("Customer: {}\n", who.join(", ")));
    }
    for (label, value) in [
        ("Address", &customer.address),
        ("Phone", &customer.phone),
        ("Tax ID", &customer.tax_id),
        ("Payment terms", &doc.doc_info.payment_terms),
        ("Credit", &doc.doc_info.credit),
    ] {
        if !value.is_empty() {
            out.push_str(&format!("{}: {}\n", label, value));
        }
    }
    out.push('\n');

    out.push_str(&format!(
        "{:>3}  {:<36} {:>8}  {:<6} {:>14} {:>14}\n",
        "#", "Description", "Qty", "Unit", "Price", "Amount"
    ));
    for (index, item) in doc.items.iter().enumerate() {
        let description = item.description.lines().next().unwrap_or("");
        let price = Money::try_from_amount(sanitize_amount(item.price_per_unit))?;
        let amount = Money::try_from_amount(item.line_total())?;
        out.push_str(&format!(
            "{:>3}  {:<36} {:>8}  {:<6} {:>14} {:>14}\n",
            index + 1,
            description,
            sanitize_amount(item.quantity),
            item.unit,
            price.to_string(),
            amount.to_string()
        ));
        out.push_str(&format!("     id {}\n", item.id));
    }
    out.push('\n');

    out.push_str(&render_summary(&doc.summary()?, doc.enable_vat));
    Ok(out)
}

/// Footer only: totals and the amount in words.
pub fn render_summary(summary: &DocumentSummary, vat_enabled: bool) -> String {
    let mut out = String::new();
    let vat_label = if vat_enabled {
        format!("VAT {}%", THAI_VAT.percentage())
    } else {
        "VAT (off)".to_string()
    };

    out.push_str(&format!("{:>20} {:>16}\n", "Subtotal", summary.subtotal));
    out.push_str(&format!("{:>20} {:>16}\n", vat_label, summary.vat_amount));
    out.push_str(&format!("{:>20} {:>16}\n", "Grand total", summary.grand_total));
    out.push_str(&format!("({})\n", summary.grand_total_text));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote_core::{DocInfo, ItemEdit};

    fn sample() -> QuotationDocument {
        let mut doc = QuotationDocument::new(DocInfo {
            no: "QT6301-002".to_string(),
            date: "4/10/2025".to_string(),
            ..DocInfo::default()
        });
        doc.customer.name = "คุณสุเทพ".to_string();
        doc.doc_info.credit = "30 วัน".to_string();
        let id = doc.add_item("ชุด");
        doc.update_item(&id, ItemEdit::Description("ชั้นวาง\nบรรทัดที่สอง".into()))
            .unwrap();
        doc.update_item(&id, ItemEdit::Quantity(1.0)).unwrap();
        doc.update_item(&id, ItemEdit::PricePerUnit(2800.0)).unwrap();
        doc
    }

    #[test]
    fn test_render_document() {
        let company = CompanyInfo {
            name: "Example Co.".to_string(),
            ..CompanyInfo::default()
        };
        let text = render_document(&sample(), &company).unwrap();

        assert!(text.starts_with("Example Co.\n"));
        assert!(text.contains("No. QT6301-002   Date 4/10/2025"));
        assert!(text.contains("Customer: คุณสุเทพ"));
        assert!(text.contains("Credit: 30 วัน"));
        assert!(!text.contains("Phone:"));
        assert!(text.contains("ชั้นวาง"));
        assert!(!text.contains("บรรทัดที่สอง"));
        assert!(text.contains("2,996.00"));
        assert!(text.contains("VAT 7%"));
        assert!(text.ends_with("(สองพันเก้าร้อยเก้าสิบหกบาทถ้วน)\n"));
    }

    #[test]
    fn test_render_summary_without_vat() {
        let mut doc = sample();
        doc.set_vat_enabled(false);
        let text = render_summary(&doc.summary().unwrap(), false);
        assert!(text.contains("VAT (off)"));
        assert!(text.contains("(สองพันแปดร้อยบาทถ้วน)"));
    }
}
