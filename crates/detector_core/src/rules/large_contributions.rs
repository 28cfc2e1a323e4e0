//! Large-contribution rule.
//!
//! Flags every contribution whose amount strictly exceeds the threshold.
//! Emission follows input order and nothing is deduplicated: the same
//! contributor can appear once per offending contribution.

use crate::types::fraud::LARGE_CONTRIBUTION_REASON;
use crate::types::{Contribution, LargeContributionCase};

/// Scan contributions and emit one case per amount above `threshold`.
pub fn scan(contributions: &[Contribution], threshold: f64) -> Vec<LargeContributionCase> {
    contributions
        .iter()
        .filter(|contribution| contribution.amount > threshold)
        .map(|contribution| LargeContributionCase {
            campaign_id: contribution.campaign_id,
            contributor: contribution.contributor.clone(),
            amount: contribution.amount,
            reason: LARGE_CONTRIBUTION_REASON.to_string(),
        })
        .collect()
}
