//! Categorised fraud cases and the evaluation report.
//!
//! The detection contract has exactly two categories, so the report keeps
//! one typed list per category instead of a free-form map from label to
//! rows. Each case carries the offending entity plus a fixed
//! human-readable reason string.

use std::fmt;

use serde::Serialize;

/// Reason attached to every large-contribution case.
pub const LARGE_CONTRIBUTION_REASON: &str = "Unusually large contribution detected";

/// Reason attached to every suspicious-approval case.
pub const SUSPICIOUS_APPROVALS_REASON: &str =
    "Milestone approved by an unusually high number of contributors";

/// The fixed set of detection categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FraudCategory {
    /// Contributions above the large-amount threshold
    LargeContributions,
    /// Campaigns whose milestone approval rate is abnormally high
    SuspiciousMilestoneApprovals,
}

impl FraudCategory {
    /// Display label used in report headings.
    pub fn label(&self) -> &'static str {
        match self {
            FraudCategory::LargeContributions => "Large Contributions",
            FraudCategory::SuspiciousMilestoneApprovals => "Suspicious Milestone Approvals",
        }
    }
}

impl fmt::Display for FraudCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A contribution flagged under [`FraudCategory::LargeContributions`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LargeContributionCase {
    /// Campaign that received the contribution
    pub campaign_id: u64,
    /// Contributor address
    pub contributor: String,
    /// Offending amount in currency units
    pub amount: f64,
    /// Human-readable reason
    pub reason: String,
}

/// A campaign flagged under [`FraudCategory::SuspiciousMilestoneApprovals`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuspiciousApprovalCase {
    /// Flagged campaign
    pub campaign_id: u64,
    /// Human-readable reason
    pub reason: String,
}

/// Result of one evaluation pass: the two fixed categories with their
/// (possibly empty) ordered case lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FraudReport {
    /// Cases emitted by the large-contribution rule, in input order
    pub large_contributions: Vec<LargeContributionCase>,
    /// Cases emitted by the approval-rate rule, in first-seen campaign order
    pub suspicious_milestone_approvals: Vec<SuspiciousApprovalCase>,
}

impl FraudReport {
    /// True when neither rule flagged anything.
    pub fn is_empty(&self) -> bool {
        self.large_contributions.is_empty() && self.suspicious_milestone_approvals.is_empty()
    }

    /// Total number of cases across both categories.
    pub fn case_count(&self) -> usize {
        self.large_contributions.len() + self.suspicious_milestone_approvals.len()
    }
}
