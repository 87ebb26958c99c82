//! Spacing and punctuation checks

use crate::context::SegmentCheckContext;
use crate::finding::{RuleCategory, RuleCheckResult, Severity};
use regex::Regex;
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;
use xliffqa_core::language::is_punctuation_equivalent;
use xliffqa_core::SegmentRecord;

static SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(" {2,}").expect("space run pattern is valid"));

/// Bracket pairs balanced independently of each other
const BRACKET_PAIRS: &[(char, char)] = &[
    ('(', ')'),
    ('[', ']'),
    ('{', '}'),
    ('（', '）'),
    ('「', '」'),
    ('『', '』'),
    ('【', '】'),
    ('《', '》'),
    ('〈', '〉'),
    ('“', '”'),
];

pub fn check_double_spaces(segment: &SegmentRecord, _ctx: &SegmentCheckContext) -> Vec<RuleCheckResult> {
    let target = &segment.segment.target_text;
    if !SPACE_RUN.is_match(target) {
        return Vec::new();
    }
    vec![RuleCheckResult::new(
        segment,
        RuleCategory::Spacing,
        Severity::Minor,
        "Target contains consecutive spaces",
    )
    .with_suggested_fix(SPACE_RUN.replace_all(target, " "))]
}

/// Leading and trailing whitespace must mirror the source
pub fn check_edge_whitespace(segment: &SegmentRecord, _ctx: &SegmentCheckContext) -> Vec<RuleCheckResult> {
    let s = &segment.segment;
    if s.target_text.trim().is_empty() {
        return Vec::new();
    }
    let (source, target) = (s.source_text.as_str(), s.target_text.as_str());
    let mut findings = Vec::new();

    let source_lead = leading_whitespace(source);
    if source_lead.is_empty() != leading_whitespace(target).is_empty() {
        findings.push(
            RuleCheckResult::new(
                segment,
                RuleCategory::Spacing,
                Severity::Minor,
                "Leading whitespace differs between source and target",
            )
            .with_suggested_fix(format!("{source_lead}{}", target.trim_start())),
        );
    }

    let source_trail = trailing_whitespace(source);
    if source_trail.is_empty() != trailing_whitespace(target).is_empty() {
        findings.push(
            RuleCheckResult::new(
                segment,
                RuleCategory::Spacing,
                Severity::Minor,
                "Trailing whitespace differs between source and target",
            )
            .with_suggested_fix(format!("{}{source_trail}", target.trim_end())),
        );
    }
    findings
}

fn leading_whitespace(text: &str) -> &str {
    &text[..text.len() - text.trim_start().len()]
}

fn trailing_whitespace(text: &str) -> &str {
    &text[text.trim_end().len()..]
}

pub fn check_unpaired_brackets(segment: &SegmentRecord, _ctx: &SegmentCheckContext) -> Vec<RuleCheckResult> {
    let target = &segment.segment.target_text;
    let mut findings: Vec<RuleCheckResult> = BRACKET_PAIRS
        .iter()
        .filter(|(open, close)| !is_balanced(target, *open, *close))
        .map(|(open, close)| {
            RuleCheckResult::new(
                segment,
                RuleCategory::Punctuation,
                Severity::Minor,
                format!("Unpaired bracket {open}{close} in target"),
            )
        })
        .collect();

    if target.matches('"').count() % 2 != 0 {
        findings.push(RuleCheckResult::new(
            segment,
            RuleCategory::Punctuation,
            Severity::Minor,
            "Unpaired quotation mark in target",
        ));
    }
    findings
}

fn is_balanced(text: &str, open: char, close: char) -> bool {
    let mut depth: i64 = 0;
    for ch in text.chars() {
        if ch == open {
            depth += 1;
        } else if ch == close {
            depth -= 1;
            if depth < 0 {
                return false;
            }
        }
    }
    depth == 0
}

/// Last grapheme cluster, so a trailing tone mark stays with its base letter
fn last_grapheme(text: &str) -> Option<&str> {
    text.trim_end().graphemes(true).next_back()
}

fn is_word_grapheme(grapheme: &str) -> bool {
    grapheme.chars().next().is_some_and(char::is_alphanumeric)
}

fn is_equivalent_end(source: &str, target: &str) -> bool {
    let mut source_chars = source.chars();
    let mut target_chars = target.chars();
    match (source_chars.next(), source_chars.next(), target_chars.next(), target_chars.next()) {
        (Some(a), None, Some(b), None) => is_punctuation_equivalent(a, b),
        _ => source == target,
    }
}

/// Terminal punctuation must agree up to fullwidth/halfwidth width
pub fn check_end_punctuation(
    segment: &SegmentRecord,
    _ctx: &SegmentCheckContext,
) -> Vec<RuleCheckResult> {
    let s = &segment.segment;
    let (Some(source_end), Some(target_end)) =
        (last_grapheme(&s.source_text), last_grapheme(&s.target_text))
    else {
        return Vec::new();
    };

    if is_word_grapheme(source_end) && is_word_grapheme(target_end) {
        return Vec::new();
    }
    if is_equivalent_end(source_end, target_end) {
        return Vec::new();
    }

    vec![RuleCheckResult::new(
        segment,
        RuleCategory::Punctuation,
        Severity::Minor,
        format!("End punctuation differs: source ends with '{source_end}', target ends with '{target_end}'"),
    )]
}
