//! Findings produced by rule checks

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use xliffqa_core::SegmentRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Major,
    Minor,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Critical, Severity::Major, Severity::Minor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Major => "major",
            Severity::Minor => "minor",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Finding category
///
/// `RepeatedWord` and `Spelling` are reserved for later check layers. The
/// repeated-word check still reports under its reserved name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    Completeness,
    TagIntegrity,
    NumberFormat,
    PlaceholderIntegrity,
    Spacing,
    Punctuation,
    UrlIntegrity,
    Capitalization,
    Consistency,
    GlossaryCompliance,
    CustomRule,
    RepeatedWord,
    Spelling,
}

impl RuleCategory {
    pub const ACTIVE: [RuleCategory; 11] = [
        RuleCategory::Completeness,
        RuleCategory::TagIntegrity,
        RuleCategory::NumberFormat,
        RuleCategory::PlaceholderIntegrity,
        RuleCategory::Spacing,
        RuleCategory::Punctuation,
        RuleCategory::UrlIntegrity,
        RuleCategory::Capitalization,
        RuleCategory::Consistency,
        RuleCategory::GlossaryCompliance,
        RuleCategory::CustomRule,
    ];

    pub const RESERVED: [RuleCategory; 2] = [RuleCategory::RepeatedWord, RuleCategory::Spelling];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCategory::Completeness => "completeness",
            RuleCategory::TagIntegrity => "tag_integrity",
            RuleCategory::NumberFormat => "number_format",
            RuleCategory::PlaceholderIntegrity => "placeholder_integrity",
            RuleCategory::Spacing => "spacing",
            RuleCategory::Punctuation => "punctuation",
            RuleCategory::UrlIntegrity => "url_integrity",
            RuleCategory::Capitalization => "capitalization",
            RuleCategory::Consistency => "consistency",
            RuleCategory::GlossaryCompliance => "glossary_compliance",
            RuleCategory::CustomRule => "custom_rule",
            RuleCategory::RepeatedWord => "repeated_word",
            RuleCategory::Spelling => "spelling",
        }
    }

    pub fn is_reserved(&self) -> bool {
        Self::RESERVED.contains(self)
    }

    /// Active followed by reserved categories
    pub fn all() -> impl Iterator<Item = RuleCategory> {
        Self::ACTIVE.into_iter().chain(Self::RESERVED)
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown rule category: {s}"))
    }
}

/// One detected issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleCheckResult {
    /// `SegmentRecord::id` of the offending segment
    pub segment_id: String,
    pub category: RuleCategory,
    pub severity: Severity,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_fix: Option<String>,
    pub source_excerpt: String,
    pub target_excerpt: String,
}

impl RuleCheckResult {
    /// Finding for `segment` with its full source and target as excerpts
    pub fn new(
        segment: &SegmentRecord,
        category: RuleCategory,
        severity: Severity,
        description: impl Into<String>,
    ) -> Self {
        Self {
            segment_id: segment.id.clone(),
            category,
            severity,
            description: description.into(),
            suggested_fix: None,
            source_excerpt: segment.segment.source_text.clone(),
            target_excerpt: segment.segment.target_text.clone(),
        }
    }

    pub fn with_suggested_fix(mut self, fix: impl Into<String>) -> Self {
        self.suggested_fix = Some(fix.into());
        self
    }
}
