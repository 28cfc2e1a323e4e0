//! CLI error type.

use detector_core::types::DatasetError;
use thiserror::Error;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the CLI binaries.
///
/// Every variant is fatal: the binaries have no retry or partial-result
/// path, so `main` returns the error and the process exits non-zero.
#[derive(Error, Debug)]
pub enum CliError {
    /// Dataset file could not be read, written, or parsed.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}
