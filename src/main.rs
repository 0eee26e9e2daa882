//! Account replay CLI
//!
//! Command-line interface for replaying deposits and withdrawals from a CSV
//! file against a rule-checked account.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- operations.csv > balance.csv
//! cargo run -- --rule overdraft --overdraft-limit 50 operations.csv > balance.csv
//! RUST_LOG=debug cargo run -- operations.csv
//! ```
//!
//! Rejected operations are logged to stderr and skipped; the final balance is
//! written to stdout.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, file not readable, output not writable)

use rule_checked_account::cli;
use rule_checked_account::replay;
use std::process;
use tracing::error;

fn main() {
    init_logging();

    let args = cli::parse_args();
    let rule = args.to_rule();

    let mut output = std::io::stdout();
    if let Err(e) = replay(&args.input_file, &*rule, &mut output) {
        error!("{}", e);
        process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default: warn)
fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
