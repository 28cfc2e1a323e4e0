//! Configurable synthetic dataset generation.
//!
//! Mirrors the activity an early crowdfunding platform would produce: a
//! handful of campaigns with milestone plans, a batch of contributions,
//! and a batch of milestone approval votes. Identifiers in contributions
//! and approvals are sampled independently of the generated campaigns, so
//! referential integrity is deliberately not guaranteed.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use detector_core::dataset::SampleDataset;
use detector_core::types::{Approval, Campaign, Contribution, Milestone};

use crate::address::random_address;

/// How many of each record kind to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of campaigns
    pub campaigns: usize,
    /// Number of contributions
    pub contributions: usize,
    /// Number of approval votes
    pub approvals: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            campaigns: 5,
            contributions: 20,
            approvals: 15,
        }
    }
}

/// Synthetic dataset generator with its own RNG state.
pub struct SampleDataGenerator {
    config: GeneratorConfig,
    now: DateTime<Utc>,
    rng: StdRng,
}

impl SampleDataGenerator {
    /// Create a generator seeded from entropy.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            now: Utc::now(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a deterministic generator for reproducible runs.
    pub fn with_seed(config: GeneratorConfig, seed: u64) -> Self {
        Self {
            config,
            now: Utc::now(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate the full dataset document.
    pub fn generate(&mut self) -> SampleDataset {
        SampleDataset {
            campaigns: self.campaigns(),
            contributions: self.contributions(),
            approvals: self.approvals(),
        }
    }

    fn campaigns(&mut self) -> Vec<Campaign> {
        let mut campaigns = Vec::with_capacity(self.config.campaigns);
        for i in 0..self.config.campaigns {
            let creator = random_address(&mut self.rng);
            let goal_amount = self.rng.gen_range(5..=20) as f64;
            let deadline_days = self.rng.gen_range(1..=10);
            let milestone_count = self.rng.gen_range(2..=5);

            let mut milestones = Vec::with_capacity(milestone_count);
            for j in 0..milestone_count {
                milestones.push(Milestone {
                    milestone_id: j as u64,
                    description: format!("Milestone {} for Campaign {}", j, i),
                    amount: self.rng.gen_range(1..=5) as f64,
                    contributed_amount: 0.0,
                    approved: false,
                    approval_count: 0,
                });
            }

            campaigns.push(Campaign {
                campaign_id: i as u64,
                creator,
                title: format!("Campaign {}", i),
                description: format!("Description for Campaign {}", i),
                goal_amount,
                current_amount: 0.0,
                deadline: (self.now + Duration::days(deadline_days)).timestamp(),
                milestones,
            });
        }
        campaigns
    }

    fn contributions(&mut self) -> Vec<Contribution> {
        let now_ts = self.now.timestamp();
        let mut contributions = Vec::with_capacity(self.config.contributions);
        for _ in 0..self.config.contributions {
            contributions.push(Contribution {
                campaign_id: self.rng.gen_range(0..self.config.campaigns) as u64,
                contributor: random_address(&mut self.rng),
                amount: round_to_cents(self.rng.gen_range(0.01..=5.0)),
                timestamp: now_ts - self.rng.gen_range(1..=5000),
            });
        }
        contributions
    }

    fn approvals(&mut self) -> Vec<Approval> {
        let mut approvals = Vec::with_capacity(self.config.approvals);
        for _ in 0..self.config.approvals {
            approvals.push(Approval {
                campaign_id: self.rng.gen_range(0..self.config.campaigns) as u64,
                // Fixed sampling range; need not match any generated
                // milestone plan.
                milestone_id: self.rng.gen_range(0..=3),
                approver: random_address(&mut self.rng),
                approved: self.rng.gen_bool(0.5),
            });
        }
        approvals
    }
}

fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
