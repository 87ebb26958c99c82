//! Caller-supplied regex rules over target text
//!
//! Patterns compile once per run. Invalid or oversized patterns are logged
//! and skipped so one bad rule cannot fail a file.

use crate::finding::{RuleCategory, RuleCheckResult, Severity};
use regex::{Regex, RegexBuilder};
use xliffqa_core::{SegmentRecord, SuppressionRuleRecord};

/// Compiled size ceiling for a single rule
const COMPILED_SIZE_LIMIT: usize = 1 << 20;

/// An active, compiled custom rule
#[derive(Debug, Clone)]
pub struct CustomRule {
    pub id: String,
    pub reason: String,
    regex: Regex,
}

impl CustomRule {
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

/// Compile the active custom rules among `records`
pub fn compile_custom_rules(records: &[SuppressionRuleRecord], max_pattern_len: usize) -> Vec<CustomRule> {
    records
        .iter()
        .filter(|r| r.is_active && r.is_custom_rule())
        .filter_map(|record| {
            let len = record.pattern.chars().count();
            if len == 0 {
                log::warn!("custom rule {} skipped: empty pattern", record.id);
                return None;
            }
            if len > max_pattern_len {
                log::warn!(
                    "custom rule {} skipped: pattern is {len} chars, limit is {max_pattern_len}",
                    record.id
                );
                return None;
            }
            match RegexBuilder::new(&record.pattern)
                .size_limit(COMPILED_SIZE_LIMIT)
                .build()
            {
                Ok(regex) => Some(CustomRule {
                    id: record.id.clone(),
                    reason: record.reason.clone(),
                    regex,
                }),
                Err(e) => {
                    log::warn!("custom rule {} skipped: invalid pattern: {e}", record.id);
                    None
                }
            }
        })
        .collect()
}

pub fn check_custom_rules(segment: &SegmentRecord, rules: &[CustomRule]) -> Vec<RuleCheckResult> {
    let target = &segment.segment.target_text;
    if target.trim().is_empty() {
        return Vec::new();
    }
    rules
        .iter()
        .filter_map(|rule| {
            let hit = rule.regex.find(target)?;
            let reason = if rule.reason.trim().is_empty() {
                format!("Target matches custom rule /{}/", rule.pattern())
            } else {
                rule.reason.clone()
            };
            Some(RuleCheckResult::new(
                segment,
                RuleCategory::CustomRule,
                Severity::Major,
                format!("{reason} (matched \"{}\")", hit.as_str()),
            ))
        })
        .collect()
}
