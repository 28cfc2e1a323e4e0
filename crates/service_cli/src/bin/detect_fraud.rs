//! `detect-fraud` - evaluate the shared dataset and print the fraud report.
//!
//! Takes no arguments; reads `sample_campaign_data.json` from the working
//! directory. Exits non-zero with a diagnostic when the file is missing or
//! malformed, printing no report.

use std::path::Path;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use detector_core::dataset::DEFAULT_DATA_FILE;

/// Screen recorded campaign activity for heuristic fraud signals
#[derive(Parser)]
#[command(name = "detect-fraud")]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> service_cli::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let _cli = Cli::parse();

    service_cli::commands::detect::run(Path::new(DEFAULT_DATA_FILE))
}
