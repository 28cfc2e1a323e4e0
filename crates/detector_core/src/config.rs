//! Detection thresholds.
//!
//! Thresholds are passed explicitly into [`crate::rules::evaluate`] so the
//! evaluation pass stays pure and testable; there are no hidden module
//! constants.

/// Named thresholds for the detection rules.
#[derive(Debug, Clone, PartialEq)]
pub struct FraudThresholds {
    /// Contributions strictly above this amount (ETH) are flagged.
    pub large_amount: f64,
    /// Campaigns whose approval rate strictly exceeds this percentage are
    /// flagged.
    pub approval_rate_pct: f64,
    /// Contributions within a ten-minute window before a contributor
    /// counts as rapid-fire. Reserved: no rule consumes this yet.
    pub rapid_transactions: u32,
}

impl Default for FraudThresholds {
    fn default() -> Self {
        Self {
            large_amount: 3.0,
            approval_rate_pct: 80.0,
            rapid_transactions: 3,
        }
    }
}
