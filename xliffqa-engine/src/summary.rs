//! Per-run finding totals and persistence batching

use crate::finding::{RuleCategory, RuleCheckResult, Severity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use xliffqa_core::FINDING_INSERT_BATCH_SIZE;

/// Finding counts by severity and category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindingSummary {
    pub total: usize,
    pub critical: usize,
    pub major: usize,
    pub minor: usize,
    pub by_category: BTreeMap<RuleCategory, usize>,
}

impl FindingSummary {
    pub fn from_findings(findings: &[RuleCheckResult]) -> Self {
        let mut summary = Self::default();
        for finding in findings {
            summary.add(finding);
        }
        summary
    }

    pub fn add(&mut self, finding: &RuleCheckResult) {
        self.total += 1;
        match finding.severity {
            Severity::Critical => self.critical += 1,
            Severity::Major => self.major += 1,
            Severity::Minor => self.minor += 1,
        }
        *self.by_category.entry(finding.category).or_insert(0) += 1;
    }

    /// Fold another summary into this one
    pub fn merge(&mut self, other: &FindingSummary) {
        self.total += other.total;
        self.critical += other.critical;
        self.major += other.major;
        self.minor += other.minor;
        for (category, count) in &other.by_category {
            *self.by_category.entry(*category).or_insert(0) += count;
        }
    }

    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical,
            Severity::Major => self.major,
            Severity::Minor => self.minor,
        }
    }
}

/// Findings in slices sized for one insert each
pub fn finding_batches(findings: &[RuleCheckResult]) -> std::slice::Chunks<'_, RuleCheckResult> {
    findings.chunks(FINDING_INSERT_BATCH_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(category: RuleCategory, severity: Severity) -> RuleCheckResult {
        RuleCheckResult {
            segment_id: "1".into(),
            category,
            severity,
            description: String::new(),
            suggested_fix: None,
            source_excerpt: String::new(),
            target_excerpt: String::new(),
        }
    }

    #[test]
    fn test_counts_by_severity_and_category() {
        let findings = vec![
            finding(RuleCategory::Completeness, Severity::Critical),
            finding(RuleCategory::Spacing, Severity::Minor),
            finding(RuleCategory::Spacing, Severity::Minor),
            finding(RuleCategory::NumberFormat, Severity::Major),
        ];
        let summary = FindingSummary::from_findings(&findings);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.count(Severity::Critical), 1);
        assert_eq!(summary.count(Severity::Minor), 2);
        assert_eq!(summary.by_category[&RuleCategory::Spacing], 2);
    }

    #[test]
    fn test_merge() {
        let mut a = FindingSummary::from_findings(&[finding(RuleCategory::Spacing, Severity::Minor)]);
        let b = FindingSummary::from_findings(&[finding(RuleCategory::Spacing, Severity::Major)]);
        a.merge(&b);
        assert_eq!(a.total, 2);
        assert_eq!(a.by_category[&RuleCategory::Spacing], 2);
    }

    #[test]
    fn test_batches_of_one_hundred() {
        let findings: Vec<_> = (0..250)
            .map(|_| finding(RuleCategory::Spacing, Severity::Minor))
            .collect();
        let sizes: Vec<usize> = finding_batches(&findings).map(<[_]>::len).collect();
        assert_eq!(sizes, vec![100, 100, 50]);
    }
}
