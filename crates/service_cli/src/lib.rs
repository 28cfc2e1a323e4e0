//! # Service CLI - Command Line Operations for Campaign Fraud Screening
//!
//! Operational entry points around the detector kernel:
//!
//! - `generate-data` - fabricate the shared sample dataset
//! - `detect-fraud` - evaluate the dataset and print the fraud report
//!
//! Both binaries take no arguments: they share the fixed relative dataset
//! path `sample_campaign_data.json` and never run concurrently against it.

pub mod commands;
pub mod report;

mod error;

pub use error::{CliError, Result};
