//! # Quotation Records
//!
//! Saves and loads documents as flat JSON records, one file per quotation.
//!
//! ## Record Layout
//! ```json
//! {
//!   "customer": { "name": "...", "company": "...", "taxId": "" },
//!   "docInfo":  { "no": "QT6301-002", "date": "4/10/2025" },
//!   "items":    [ { "id": "...", "qty": 1, "pricePerUnit": 2800.0 } ],
//!   "enableVat": true
//! }
//! ```
//!
//! Files are named `quotation_<document no>.json`, the name the form gives
//! its downloads, so files from either side can be opened by the other.
//! Totals are not stored; they are recomputed after loading.

use std::fs;
use std::path::{Path, PathBuf};

use quote_core::QuotationDocument;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};

const FILE_PREFIX: &str = "quotation_";
const FILE_EXTENSION: &str = "json";

/// Keys a file must carry to count as a quotation record.
const REQUIRED_KEYS: [&str; 3] = ["customer", "docInfo", "items"];

/// A directory of quotation records.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    dir: PathBuf,
}

impl DocumentStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DocumentStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path the document would be saved to.
    pub fn path_for(&self, doc: &QuotationDocument) -> PathBuf {
        self.dir.join(file_name_for(&doc.doc_info.no))
    }

    /// Validates and writes the document, returning the file path.
    ///
    /// An existing file for the same document number is overwritten.
    pub fn save(&self, doc: &QuotationDocument) -> StoreResult<PathBuf> {
        doc.validate()?;

        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(doc);
        let json = serde_json::to_string_pretty(doc)?;
        fs::write(&path, json)?;

        info!(?path, items = doc.items.len(), "Quotation saved");
        Ok(path)
    }

    /// Reads a record from any path.
    ///
    /// ## Errors
    /// - [`StoreError::Io`] if the file cannot be read
    /// - [`StoreError::InvalidRecord`] if it is not JSON, or lacks
    ///   `customer`, `docInfo` or `items`
    pub fn load(&self, path: impl AsRef<Path>) -> StoreResult<QuotationDocument> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        let invalid = |reason: String| StoreError::InvalidRecord {
            path: path.to_path_buf(),
            reason,
        };

        let value: Value = serde_json::from_str(&contents).map_err(|e| invalid(e.to_string()))?;

        if let Some(missing) = REQUIRED_KEYS.iter().find(|key| value.get(**key).is_none()) {
            return Err(invalid(format!("missing `{}`", missing)));
        }

        let doc: QuotationDocument =
            serde_json::from_value(value).map_err(|e| invalid(e.to_string()))?;

        info!(?path, no = %doc.doc_info.no, "Quotation loaded");
        Ok(doc)
    }

    /// Loads the record saved under this document number.
    pub fn load_by_no(&self, no: &str) -> StoreResult<QuotationDocument> {
        self.load(self.dir.join(file_name_for(no)))
    }

    /// Lists record files in the directory, sorted by name.
    ///
    /// A missing directory lists as empty.
    pub fn list(&self) -> StoreResult<Vec<PathBuf>> {
        if !self.dir.exists() {
            debug!(dir = ?self.dir, "Store directory does not exist yet");
            return Ok(Vec::new());
        }

        let mut paths: Vec<PathBuf> = fs::read_dir(&self.dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| is_record_file(path))
            .collect();
        paths.sort();

        Ok(paths)
    }
}

/// `quotation_<no>.json`, with characters unsafe in file names replaced.
pub fn file_name_for(no: &str) -> String {
    let safe: String = no
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() || c.is_whitespace() => '_',
            c => c,
        })
        .collect();

    format!("{}{}.{}", FILE_PREFIX, safe, FILE_EXTENSION)
}

fn is_record_file(path: &Path) -> bool {
    path.is_file()
        && path.extension().and_then(|e| e.to_str()) == Some(FILE_EXTENSION)
        && path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(FILE_PREFIX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote_core::{DocInfo, ItemEdit};

    fn sample_document(no: &str) -> QuotationDocument {
        let mut doc = QuotationDocument::new(DocInfo {
            no: no.to_string(),
            date: "4/10/2025".to_string(),
            ..DocInfo::default()
        });
        doc.customer.name = "คุณสุเทพ".to_string();
        let id = doc.add_item("ชุด");
        doc.update_item(&id, ItemEdit::Quantity(1.0)).unwrap();
        doc.update_item(&id, ItemEdit::PricePerUnit(2800.0)).unwrap();
        doc
    }

    #[test]
    fn test_file_name_for() {
        assert_eq!(file_name_for("QT6301-002"), "quotation_QT6301-002.json");
        assert_eq!(file_name_for("QT 1/2"), "quotation_QT_1_2.json");
    }

    #[test]
    fn test_save_then_load_keeps_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path());
        let doc = sample_document("QT6301-002");

        let path = store.save(&doc).unwrap();
        assert!(path.ends_with("quotation_QT6301-002.json"));

        let loaded = store.load(&path).unwrap();
        assert_eq!(loaded, doc);
        assert_eq!(loaded.summary().unwrap(), doc.summary().unwrap());
        assert_eq!(
            loaded.summary().unwrap().grand_total_text,
            "สองพันเก้าร้อยเก้าสิบหกบาทถ้วน"
        );
    }

    #[test]
    fn test_load_by_no() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path());
        store.save(&sample_document("QT-7")).unwrap();

        assert_eq!(store.load_by_no("QT-7").unwrap().doc_info.no, "QT-7");
        assert!(matches!(store.load_by_no("QT-8"), Err(StoreError::Io(_))));
    }

    #[test]
    fn test_save_rejects_invalid_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path());

        assert!(matches!(
            store.save(&sample_document("")),
            Err(StoreError::Core(_))
        ));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_load_file_saved_by_form() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotation_QT6301-002.json");
        fs::write(
            &path,
            r#"{
              "customer": {
                "name": "คุณสุเทพ",
                "company": "SEWS-COMPONENTS.,Ltd.",
                "address": "",
                "phone": "0-955-576665",
                "taxId": ""
              },
              "docInfo": { "no": "QT6301-002", "date": "4/10/2025", "paymentTerms": "", "credit": "เครดิต" },
              "items": [
                { "id": "1", "description": "ชั้นวาง", "qty": 1, "unit": "ชุด", "pricePerUnit": 2800, "image": null },
                { "id": "1700000000000", "description": "", "qty": "", "unit": "หน่วย", "pricePerUnit": 0 }
              ],
              "enableVat": true
            }"#,
        )
        .unwrap();

        let doc = DocumentStore::new(dir.path()).load(&path).unwrap();
        assert_eq!(doc.items.len(), 2);
        assert_eq!(doc.summary().unwrap().grand_total, "2,996.00");
    }

    #[test]
    fn test_load_rejects_non_records() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path());

        let not_json = dir.path().join("quotation_a.json");
        fs::write(&not_json, "not json").unwrap();
        assert!(matches!(
            store.load(&not_json),
            Err(StoreError::InvalidRecord { .. })
        ));

        let no_items = dir.path().join("quotation_b.json");
        fs::write(&no_items, r#"{"customer": {}, "docInfo": {}}"#).unwrap();
        match store.load(&no_items) {
            Err(StoreError::InvalidRecord { reason, .. }) => assert!(reason.contains("items")),
            other => panic!("expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path().join("records"));
        assert!(store.list().unwrap().is_empty());

        store.save(&sample_document("QT-2")).unwrap();
        store.save(&sample_document("QT-1")).unwrap();
        fs::write(store.dir().join("notes.txt"), "x").unwrap();

        let names: Vec<String> = store
            .list()
            .unwrap()
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(String::from))
            .collect();
        assert_eq!(names, vec!["quotation_QT-1.json", "quotation_QT-2.json"]);
    }
}
