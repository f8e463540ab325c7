//! # quote: Quotation Command Line
//!
//! Thin shell over `quote-core` and `quote-store`. Every subcommand maps to
//! one handler in [`commands`]; this module only parses arguments, loads
//! configuration and sets up logging.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────────┐     ┌──────────────────┐
//! │  clap (Cli)  │────►│ commands::*     │────►│ quote-core        │
//! │  + tracing   │     │ (one per verb)  │     │ (totals, baht)    │
//! └──────────────┘     └────────┬────────┘     └──────────────────┘
//!                               │
//!                               ▼
//!                      ┌─────────────────┐
//!                      │ quote-store     │
//!                      │ (JSON + TOML)   │
//!                      └─────────────────┘
//! ```
//!
//! Logs go to stderr so command output on stdout stays clean.
//! Set `RUST_LOG` to change the filter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use quote_store::QuoteConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;
pub mod render;

use commands::{Context, CustomerFields, DocFields, ItemFields};
pub use error::{CliError, CliResult};

// =============================================================================
// Arguments
// =============================================================================

#[derive(Parser, Debug)]
#[command(name = "quote")]
#[command(about = "Build quotations and spell amounts in Thai baht", version)]
pub struct Cli {
    /// Config file (also read from `QUOTE_CONFIG`).
    #[arg(long, global = true, env = "QUOTE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Record directory, overriding the config file.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an empty quotation.
    New {
        no: String,
        /// Defaults to today, D/M/YYYY.
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        customer_name: Option<String>,
        #[arg(long)]
        company: Option<String>,
    },
    /// Append a line item.
    AddItem {
        no: String,
        #[command(flatten)]
        fields: ItemArgs,
    },
    /// Edit a line item by id.
    SetItem {
        no: String,
        id: String,
        #[command(flatten)]
        fields: ItemArgs,
    },
    /// Delete a line item by id.
    RemoveItem { no: String, id: String },
    /// Edit the customer block.
    SetCustomer {
        no: String,
        #[command(flatten)]
        fields: CustomerArgs,
    },
    /// Edit the document header (date, payment terms, credit).
    SetDoc {
        no: String,
        #[command(flatten)]
        fields: DocArgs,
    },
    /// Turn VAT on or off.
    Vat { no: String, state: Toggle },
    /// Print a quotation with its totals.
    Show { no: String },
    /// List saved quotations.
    List,
    /// Spell an amount in Thai baht.
    BahtText {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
}

#[derive(Args, Debug, Default)]
pub struct ItemArgs {
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub qty: Option<f64>,
    #[arg(long)]
    pub unit: Option<String>,
    #[arg(long)]
    pub price: Option<f64>,
    /// Image URL; pass "" to remove it.
    #[arg(long)]
    pub image: Option<String>,
}

impl From<ItemArgs> for ItemFields {
    fn from(args: ItemArgs) -> Self {
        ItemFields {
            description: args.description,
            quantity: args.qty,
            unit: args.unit,
            price_per_unit: args.price,
            image: args.image,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct CustomerArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    /// 13-digit tax id; dashes and spaces are ignored.
    #[arg(long)]
    pub tax_id: Option<String>,
}

impl From<CustomerArgs> for CustomerFields {
    fn from(args: CustomerArgs) -> Self {
        CustomerFields {
            name: args.name,
            company: args.company,
            address: args.address,
            phone: args.phone,
            tax_id: args.tax_id,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct DocArgs {
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub payment_terms: Option<String>,
    #[arg(long)]
    pub credit: Option<String>,
}

impl From<DocArgs> for DocFields {
    fn from(args: DocArgs) -> Self {
        DocFields {
            date: args.date,
            payment_terms: args.payment_terms,
            credit: args.credit,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    On,
    Off,
}

// =============================================================================
// Entry Points
// =============================================================================

/// Initializes the tracing subscriber.
///
/// Defaults to `warn` for dependencies and `info` for our crates.
/// Override with `RUST_LOG=debug` for troubleshooting.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,quote_cli=info,quote_store=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs one parsed command and returns what to print.
pub fn run(cli: Cli) -> CliResult<String> {
    let mut config = QuoteConfig::load_or_default(cli.config);
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = Some(dir);
    }
    let ctx = Context::new(config);
    debug!(dir = ?ctx.store.dir(), "Using record directory");

    match cli.command {
        Command::New {
            no,
            date,
            customer_name,
            company,
        } => {
            let date = date.unwrap_or_else(today);
            commands::new_document(&ctx, &no, date, customer_name, company)
        }
        Command::AddItem { no, fields } => commands::add_item(&ctx, &no, fields.into()),
        Command::SetItem { no, id, fields } => commands::set_item(&ctx, &no, &id, fields.into()),
        Command::RemoveItem { no, id } => commands::remove_item(&ctx, &no, &id),
        Command::SetCustomer { no, fields } => commands::set_customer(&ctx, &no, fields.into()),
        Command::SetDoc { no, fields } => commands::set_doc(&ctx, &no, fields.into()),
        Command::Vat { no, state } => commands::set_vat(&ctx, &no, state == Toggle::On),
        Command::Show { no } => commands::show(&ctx, &no),
        Command::List => commands::list(&ctx),
        Command::BahtText { amount } => commands::baht_text(amount),
    }
}

/// Today's date the way the form fills it in: 4/10/2025.
fn today() -> String {
    chrono::Local::now().format("%-d/%-m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add_item() {
        let cli = Cli::try_parse_from([
            "quote", "add-item", "QT-1", "--qty", "2", "--price", "150.5", "--unit", "ชุด",
        ])
        .unwrap();

        match cli.command {
            Command::AddItem { no, fields } => {
                assert_eq!(no, "QT-1");
                assert_eq!(fields.qty, Some(2.0));
                assert_eq!(fields.price, Some(150.5));
                assert_eq!(fields.unit.as_deref(), Some("ชุด"));
                assert!(fields.description.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_vat_toggle() {
        let cli = Cli::try_parse_from(["quote", "vat", "QT-1", "off"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Vat {
                state: Toggle::Off,
                ..
            }
        ));
        assert!(Cli::try_parse_from(["quote", "vat", "QT-1", "maybe"]).is_err());
    }

    #[test]
    fn test_run_against_temp_dir() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().to_str().unwrap();
        let config = dir.path().join("missing.toml");
        let config = config.to_str().unwrap();

        let parse = |args: &[&str]| {
            let mut full = vec!["quote", "--config", config, "--data-dir", data_dir];
            full.extend_from_slice(args);
            Cli::try_parse_from(full).unwrap()
        };

        run(parse(&["new", "QT-1", "--date", "1/1/2026"])).unwrap();
        let out = run(parse(&["add-item", "QT-1", "--qty", "3", "--price", "100"])).unwrap();
        assert!(out.contains("321.00"));
        assert!(out.contains("(สามร้อยยี่สิบเอ็ดบาทถ้วน)"));

        run(parse(&[
            "set-customer", "QT-1", "--name", "คุณสุเทพ", "--tax-id", "0105551234567",
        ]))
        .unwrap();
        run(parse(&["set-doc", "QT-1", "--payment-terms", "เงินสด", "--credit", "30 วัน"]))
            .unwrap();
        assert!(run(parse(&["set-customer", "QT-1", "--tax-id", "12"])).is_err());

        let shown = run(parse(&["show", "QT-1"])).unwrap();
        assert!(shown.contains("Customer: คุณสุเทพ"));

        let listed = run(parse(&["list"])).unwrap();
        assert!(listed.starts_with("QT-1"));
    }

    #[test]
    fn test_parse_set_doc() {
        let cli = Cli::try_parse_from([
            "quote", "set-doc", "QT-1", "--date", "4/10/2025", "--payment-terms", "มัดจำ 50%",
        ])
        .unwrap();

        match cli.command {
            Command::SetDoc { no, fields } => {
                assert_eq!(no, "QT-1");
                assert_eq!(fields.date.as_deref(), Some("4/10/2025"));
                assert_eq!(fields.payment_terms.as_deref(), Some("มัดจำ 50%"));
                assert!(fields.credit.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_today_format() {
        let date = today();
        let parts: Vec<&str> = date.split('/').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[2].len(), 4);
    }
}
