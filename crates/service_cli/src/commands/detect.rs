//! Detect command implementation
//!
//! Loads the shared dataset, runs the rule evaluation pass, and prints the
//! tabular report.

use std::path::Path;

use tracing::info;

use detector_core::config::FraudThresholds;
use detector_core::{dataset, rules};

use crate::{report, Result};

/// Run the detect command against the dataset at `path`.
///
/// Fails before printing anything when the file is missing or malformed.
pub fn run(path: &Path) -> Result<()> {
    info!("Loading dataset from {}...", path.display());
    let data = dataset::load(path)?;
    info!(
        "Evaluating {} contributions and {} approvals",
        data.contributions.len(),
        data.approvals.len()
    );

    let thresholds = FraudThresholds::default();
    let result = rules::evaluate(&data.contributions, &data.approvals, &thresholds);
    info!("Flagged {} cases", result.case_count());

    print!("{}", report::render(&result));
    Ok(())
}
