//! # quote-store: Records and Configuration
//!
//! The file-system side of the quotation engine. The pure logic lives in
//! `quote-core`; this crate only moves documents and settings on and off
//! disk.
//!
//! ## Module Organization
//!
//! - [`record`] - Saving and loading quotation records (`DocumentStore`)
//! - [`config`] - TOML configuration with environment overrides
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quote_store::{DocumentStore, QuoteConfig};
//!
//! let config = QuoteConfig::load_or_default(None);
//! let store = DocumentStore::new(config.data_dir());
//!
//! for path in store.list()? {
//!     let doc = store.load(&path)?;
//!     println!("{}: {}", doc.doc_info.no, doc.summary()?.grand_total_text);
//! }
//! # Ok::<(), quote_store::StoreError>(())
//! ```

pub mod config;
pub mod error;
pub mod record;

pub use config::QuoteConfig;
pub use error::{StoreError, StoreResult};
pub use record::DocumentStore;
