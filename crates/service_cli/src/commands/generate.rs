//! Generate command implementation
//!
//! Fabricates a fresh sample dataset and writes it to the shared file.

use std::path::Path;

use tracing::info;

use adapter_datagen::{GeneratorConfig, SampleDataGenerator};
use detector_core::dataset;

use crate::Result;

/// Run the generate command, overwriting any previous dataset at `path`.
pub fn run(path: &Path) -> Result<()> {
    let config = GeneratorConfig::default();
    info!("Generating sample campaign data...");
    info!("  Campaigns: {}", config.campaigns);
    info!("  Contributions: {}", config.contributions);
    info!("  Approvals: {}", config.approvals);

    let data = SampleDataGenerator::new(config).generate();
    dataset::save(path, &data)?;

    println!("Sample campaign data generated successfully.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_writes_loadable_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample_campaign_data.json");
        run(&path).unwrap();

        let data = dataset::load(&path).unwrap();
        assert_eq!(data.campaigns.len(), 5);
        assert_eq!(data.contributions.len(), 20);
        assert_eq!(data.approvals.len(), 15);
    }

    #[test]
    fn test_run_overwrites_previous_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample_campaign_data.json");
        std::fs::write(&path, "stale").unwrap();
        run(&path).unwrap();
        assert!(dataset::load(&path).is_ok());
    }
}
