//! `generate-data` - fabricate the shared sample dataset.
//!
//! Takes no arguments; writes `sample_campaign_data.json` in the working
//! directory, replacing any previous file, and prints a one-line success
//! message.

use std::path::Path;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use detector_core::dataset::DEFAULT_DATA_FILE;

/// Generate sample crowdfunding campaign activity
#[derive(Parser)]
#[command(name = "generate-data")]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> service_cli::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let _cli = Cli::parse();

    service_cli::commands::generate::run(Path::new(DEFAULT_DATA_FILE))
}
