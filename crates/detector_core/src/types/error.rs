//! Structured errors for dataset access and parsing.
//!
//! The evaluator has exactly two failure modes, both fatal: the input file
//! cannot be read, or it does not parse as the expected document. There is
//! no partial-result or retry path.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or writing the shared dataset document.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Input file absent or unreadable.
    #[error("cannot access dataset file {path}")]
    FileAccess {
        /// Path that could not be read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// File present but not a valid dataset document (bad JSON or missing
    /// expected keys).
    #[error("malformed dataset document {path}")]
    Parse {
        /// Path of the malformed document
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}
