use std::process::ExitCode;

use clap::Parser;
use quote_cli::{init_tracing, run, Cli};

fn main() -> ExitCode {
    init_tracing();

    match run(Cli::parse()) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
