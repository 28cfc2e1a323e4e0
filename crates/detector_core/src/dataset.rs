//! The shared on-disk dataset document.
//!
//! The generator writes this document and the evaluator reads it back; the
//! two never run concurrently against the same file. Writes are
//! unconditional overwrites, pretty-printed so the sample file stays
//! readable.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{Approval, Campaign, Contribution, DatasetError};

/// Relative path both CLI entry points use for the dataset file.
pub const DEFAULT_DATA_FILE: &str = "sample_campaign_data.json";

/// Top-level dataset document: `campaigns`, `contributions`, `approvals`.
///
/// The evaluator only consumes `contributions` and `approvals`; `campaigns`
/// is carried for the generator's benefit and ignored on evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleDataset {
    /// Generated campaigns (ignored by the evaluator)
    pub campaigns: Vec<Campaign>,
    /// Funding transactions
    pub contributions: Vec<Contribution>,
    /// Milestone approval votes
    pub approvals: Vec<Approval>,
}

/// Load a dataset document from `path`.
///
/// # Errors
///
/// - [`DatasetError::FileAccess`] when the file is absent or unreadable
/// - [`DatasetError::Parse`] when the content is not a valid document
pub fn load(path: impl AsRef<Path>) -> Result<SampleDataset, DatasetError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| DatasetError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a dataset document to `path`, replacing any existing file.
///
/// # Errors
///
/// [`DatasetError::FileAccess`] when the file cannot be written.
pub fn save(path: impl AsRef<Path>, dataset: &SampleDataset) -> Result<(), DatasetError> {
    let path = path.as_ref();
    let raw = serde_json::to_string_pretty(dataset).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, raw).map_err(|source| DatasetError::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}
