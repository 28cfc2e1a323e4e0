//! Campaign activity and fraud reporting types.
//!
//! This module provides:
//! - `activity`: the records the evaluator consumes (`Contribution`, `Approval`)
//! - `campaign`: generated-only campaign structure (`Campaign`, `Milestone`)
//! - `fraud`: categorised fraud cases and the two-category report
//! - `error`: structured errors for dataset access and parsing
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level:
//! - [`Contribution`], [`Approval`] from `activity`
//! - [`Campaign`], [`Milestone`] from `campaign`
//! - [`FraudCategory`], [`FraudReport`], [`LargeContributionCase`],
//!   [`SuspiciousApprovalCase`] from `fraud`
//! - [`DatasetError`] from `error`

pub mod activity;
pub mod campaign;
pub mod error;
pub mod fraud;

// Re-export commonly used types at module level
pub use activity::{Approval, Contribution};
pub use campaign::{Campaign, Milestone};
pub use error::DatasetError;
pub use fraud::{FraudCategory, FraudReport, LargeContributionCase, SuspiciousApprovalCase};
