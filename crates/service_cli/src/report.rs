//! Tabular rendering of the fraud report.
//!
//! Pure string building so the layout is testable; the `detect-fraud`
//! binary prints the result to stdout.

use detector_core::types::{FraudCategory, FraudReport};

const BANNER: &str = "========================================";
const RULE_SEPARATOR: &str =
    "------------------------------------------------------------------------------------------";

/// Render the full two-section report.
pub fn render(report: &FraudReport) -> String {
    let mut out = String::new();

    out.push_str(BANNER);
    out.push('\n');
    out.push_str("FRAUD DETECTION REPORT\n");
    out.push_str(BANNER);
    out.push_str("\n\n");

    render_large_contributions(&mut out, report);
    out.push('\n');
    render_suspicious_approvals(&mut out, report);

    out
}

fn render_large_contributions(out: &mut String, report: &FraudReport) {
    out.push_str(FraudCategory::LargeContributions.label());
    out.push('\n');
    if report.large_contributions.is_empty() {
        out.push_str("No large contributions detected.\n");
        return;
    }

    out.push_str(RULE_SEPARATOR);
    out.push('\n');
    out.push_str(&format!(
        "{:<12} {:<44} {:<13} {}\n",
        "Campaign ID", "Contributor", "Amount (ETH)", "Reason"
    ));
    out.push_str(RULE_SEPARATOR);
    out.push('\n');
    for case in &report.large_contributions {
        out.push_str(&format!(
            "{:<12} {:<44} {:<13.2} {}\n",
            case.campaign_id, case.contributor, case.amount, case.reason
        ));
    }
    out.push_str(RULE_SEPARATOR);
    out.push('\n');
}

fn render_suspicious_approvals(out: &mut String, report: &FraudReport) {
    out.push_str(FraudCategory::SuspiciousMilestoneApprovals.label());
    out.push('\n');
    if report.suspicious_milestone_approvals.is_empty() {
        out.push_str("No suspicious milestone approvals detected.\n");
        return;
    }

    out.push_str(RULE_SEPARATOR);
    out.push('\n');
    out.push_str(&format!("{:<12} {}\n", "Campaign ID", "Reason"));
    out.push_str(RULE_SEPARATOR);
    out.push('\n');
    for case in &report.suspicious_milestone_approvals {
        out.push_str(&format!("{:<12} {}\n", case.campaign_id, case.reason));
    }
    out.push_str(RULE_SEPARATOR);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use detector_core::types::fraud::{LARGE_CONTRIBUTION_REASON, SUSPICIOUS_APPROVALS_REASON};
    use detector_core::types::{LargeContributionCase, SuspiciousApprovalCase};

    #[test]
    fn test_empty_report_uses_fallback_lines() {
        let rendered = render(&FraudReport::default());
        assert!(rendered.contains("FRAUD DETECTION REPORT"));
        assert!(rendered.contains("No large contributions detected."));
        assert!(rendered.contains("No suspicious milestone approvals detected."));
    }

    #[test]
    fn test_large_contribution_rows_are_rendered() {
        let report = FraudReport {
            large_contributions: vec![LargeContributionCase {
                campaign_id: 1,
                contributor: "0xA".to_string(),
                amount: 5.0,
                reason: LARGE_CONTRIBUTION_REASON.to_string(),
            }],
            suspicious_milestone_approvals: vec![],
        };
        let rendered = render(&report);
        assert!(rendered.contains("Large Contributions"));
        assert!(rendered.contains("Campaign ID"));
        assert!(rendered.contains("0xA"));
        assert!(rendered.contains("5.00"));
        assert!(rendered.contains(LARGE_CONTRIBUTION_REASON));
        assert!(!rendered.contains("No large contributions detected."));
        assert!(rendered.contains("No suspicious milestone approvals detected."));
    }

    #[test]
    fn test_suspicious_approval_rows_are_rendered() {
        let report = FraudReport {
            large_contributions: vec![],
            suspicious_milestone_approvals: vec![SuspiciousApprovalCase {
                campaign_id: 7,
                reason: SUSPICIOUS_APPROVALS_REASON.to_string(),
            }],
        };
        let rendered = render(&report);
        assert!(rendered.contains("Suspicious Milestone Approvals"));
        assert!(rendered.contains('7'));
        assert!(rendered.contains(SUSPICIOUS_APPROVALS_REASON));
        assert!(rendered.contains("No large contributions detected."));
    }

    #[test]
    fn test_rows_keep_report_order() {
        let report = FraudReport {
            large_contributions: vec![
                LargeContributionCase {
                    campaign_id: 3,
                    contributor: "0xFIRST".to_string(),
                    amount: 4.0,
                    reason: LARGE_CONTRIBUTION_REASON.to_string(),
                },
                LargeContributionCase {
                    campaign_id: 1,
                    contributor: "0xSECOND".to_string(),
                    amount: 3.5,
                    reason: LARGE_CONTRIBUTION_REASON.to_string(),
                },
            ],
            suspicious_milestone_approvals: vec![],
        };
        let rendered = render(&report);
        let first = rendered.find("0xFIRST").unwrap();
        let second = rendered.find("0xSECOND").unwrap();
        assert!(first < second);
    }
}
