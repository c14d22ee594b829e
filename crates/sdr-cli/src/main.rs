//! SDR evaluation CLI
//!
//! Runs the lead-scoring evaluation harness against the Grok API and
//! inspects saved reports.
//!
//! ```bash
//! export XAI_API_KEY=...
//! sdr-eval check                       # connectivity test
//! sdr-eval run --format markdown       # full evaluation
//! sdr-eval run --category security     # one category only
//! sdr-eval list                        # show the fixture catalog
//! sdr-eval report --input evaluation_report.json
//! sdr-eval compare --baseline old.json --current new.json
//! ```

mod args;
mod commands;
mod console;
mod router;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub use args::{Cli, Commands};

fn init_logging(verbose: bool, json: bool) {
    // RUST_LOG wins over --verbose
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_json);
    router::route(cli).await
}
