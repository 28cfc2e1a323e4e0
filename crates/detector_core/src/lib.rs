//! # detector_core: Rule Kernel for Campaign Fraud Screening
//!
//! ## Layer Role
//!
//! detector_core is the kernel of the workspace. It owns:
//! - Campaign activity types: `Contribution`, `Approval`, `Campaign`,
//!   `Milestone` (`types::activity`, `types::campaign`)
//! - Fraud case and report types: `FraudReport`, `FraudCategory`
//!   (`types::fraud`)
//! - Detection thresholds: `FraudThresholds` (`config`)
//! - The rule evaluation pass (`rules`)
//! - The on-disk dataset document and its errors (`dataset`, `types::error`)
//!
//! ## Purity
//!
//! Rule evaluation is a pure function over in-memory slices: thresholds are
//! passed in explicitly and no rule touches the filesystem, the clock, or
//! any global state. The only I/O in this crate is the `dataset` module,
//! which reads and writes the shared JSON document.
//!
//! ## Usage Example
//!
//! ```rust
//! use detector_core::config::FraudThresholds;
//! use detector_core::rules;
//! use detector_core::types::Contribution;
//!
//! let contributions = vec![Contribution {
//!     campaign_id: 1,
//!     contributor: "0xA".to_string(),
//!     amount: 5.0,
//!     timestamp: 1000,
//! }];
//! let report = rules::evaluate(&contributions, &[], &FraudThresholds::default());
//! assert_eq!(report.large_contributions.len(), 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod dataset;
pub mod rules;
pub mod types;
