//! Untranslated and copied-source segments

use crate::context::SegmentCheckContext;
use crate::finding::{RuleCategory, RuleCheckResult, Severity};
use xliffqa_core::language::normalize_for_comparison;
use xliffqa_core::SegmentRecord;

pub fn check_untranslated(segment: &SegmentRecord, _ctx: &SegmentCheckContext) -> Vec<RuleCheckResult> {
    let s = &segment.segment;
    if s.source_text.trim().is_empty() || !s.target_text.trim().is_empty() {
        return Vec::new();
    }
    vec![RuleCheckResult::new(
        segment,
        RuleCategory::Completeness,
        Severity::Critical,
        "Segment is not translated",
    )]
}

/// Target equal to source after NFKC, unless the source needs no translation
pub fn check_identical_to_source(
    segment: &SegmentRecord,
    _ctx: &SegmentCheckContext,
) -> Vec<RuleCheckResult> {
    let s = &segment.segment;
    let source = normalize_for_comparison(&s.source_text);
    if source.is_empty() || source != normalize_for_comparison(&s.target_text) {
        return Vec::new();
    }
    if is_translation_neutral(&source) {
        return Vec::new();
    }
    vec![RuleCheckResult::new(
        segment,
        RuleCategory::Completeness,
        Severity::Major,
        "Target is identical to source",
    )]
}

/// Numbers, symbols and single proper nouns stay the same in every language
fn is_translation_neutral(text: &str) -> bool {
    if !text.chars().any(char::is_alphabetic) {
        return true;
    }
    let mut tokens = text.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => token
            .trim_matches(|c: char| !c.is_alphanumeric())
            .chars()
            .next()
            .is_some_and(char::is_uppercase),
        _ => false,
    }
}
