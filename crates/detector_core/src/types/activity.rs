//! Activity records consumed by the rule evaluator.
//!
//! Field names match the wire format of the shared JSON document exactly.
//! Both record kinds are immutable once generated; the evaluator never
//! cross-checks their `campaign_id` against a generated campaign.

use serde::{Deserialize, Serialize};

/// A recorded funding transaction against a campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    /// Campaign the funds were sent to
    pub campaign_id: u64,
    /// Contributor address
    pub contributor: String,
    /// Contributed amount in currency units (ETH)
    pub amount: f64,
    /// Transaction time, seconds since epoch
    pub timestamp: i64,
}

/// A recorded vote by an address for a campaign's milestone release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Approval {
    /// Campaign the milestone belongs to
    pub campaign_id: u64,
    /// Milestone being voted on
    pub milestone_id: u64,
    /// Approver address
    pub approver: String,
    /// Whether the vote endorsed the release
    pub approved: bool,
}
