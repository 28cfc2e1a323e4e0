//! Campaign structure as produced by the sample-data generator.
//!
//! The evaluator ignores campaigns entirely; these types exist so the
//! generated document round-trips without loss.

use serde::{Deserialize, Serialize};

/// A crowdfunding campaign with its milestone plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    /// Campaign identifier
    pub campaign_id: u64,
    /// Creator address
    pub creator: String,
    /// Campaign title
    pub title: String,
    /// Campaign description
    pub description: String,
    /// Funding goal in currency units
    pub goal_amount: f64,
    /// Amount raised so far
    pub current_amount: f64,
    /// Funding deadline, seconds since epoch
    pub deadline: i64,
    /// Ordered milestone plan
    pub milestones: Vec<Milestone>,
}

/// A single milestone within a campaign's release plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Milestone identifier, ordered within the campaign
    pub milestone_id: u64,
    /// Milestone description
    pub description: String,
    /// Amount released when the milestone completes
    pub amount: f64,
    /// Amount contributed toward this milestone
    pub contributed_amount: f64,
    /// Whether the milestone has been approved for release
    pub approved: bool,
    /// Number of approval votes received
    pub approval_count: u64,
}
