//! # CLI Error Type
//!
//! Everything a command can fail with, printed to stderr by `main`.
//!
//! ```text
//! CoreError ──┐
//!             ├──► CliError ──► "error: ..." + exit code 1
//! StoreError ─┘
//! ```

use quote_core::CoreError;
use quote_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// `new` refuses to overwrite an existing record.
    #[error("Quotation {0} already exists")]
    AlreadyExists(String),
}

pub type CliResult<T> = Result<T, CliError>;
