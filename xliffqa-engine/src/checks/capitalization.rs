//! Acronyms and CamelCase product names carried over verbatim

use crate::context::SegmentCheckContext;
use crate::finding::{RuleCategory, RuleCheckResult, Severity};
use regex::Regex;
use std::sync::LazyLock;
use xliffqa_core::SegmentRecord;

static LATIN_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z][A-Za-z0-9]*").expect("token pattern is valid"));

/// `API`, `HTML5` and the like: two or more letters, all uppercase
fn is_all_caps(token: &str) -> bool {
    let letters: Vec<char> = token.chars().filter(char::is_ascii_alphabetic).collect();
    letters.len() >= 2 && letters.iter().all(char::is_ascii_uppercase)
}

/// `JavaScript`, `iPhone`: an uppercase letter right after a lowercase one
fn is_camel_case(token: &str) -> bool {
    token
        .as_bytes()
        .windows(2)
        .any(|w| w[0].is_ascii_lowercase() && w[1].is_ascii_uppercase())
}

/// Distinct ALLCAPS and CamelCase tokens in order of appearance
pub fn cased_terms(text: &str) -> Vec<&str> {
    let mut terms: Vec<&str> = Vec::new();
    for m in LATIN_TOKEN.find_iter(text) {
        let token = m.as_str();
        let bounded = !text[..m.start()].chars().next_back().is_some_and(char::is_alphanumeric)
            && !text[m.end()..].chars().next().is_some_and(char::is_alphanumeric);
        if bounded && (is_all_caps(token) || is_camel_case(token)) && !terms.contains(&token) {
            terms.push(token);
        }
    }
    terms
}

pub fn check_cased_terms(segment: &SegmentRecord, _ctx: &SegmentCheckContext) -> Vec<RuleCheckResult> {
    let s = &segment.segment;
    // Targets in a non-Latin script may legitimately transliterate
    if !s.target_text.chars().any(|c| c.is_ascii_alphabetic()) {
        return Vec::new();
    }
    cased_terms(&s.source_text)
        .into_iter()
        .filter(|term| !s.target_text.contains(term))
        .map(|term| {
            RuleCheckResult::new(
                segment,
                RuleCategory::Capitalization,
                Severity::Minor,
                format!("Term \"{term}\" from source is missing in target"),
            )
            .with_suggested_fix(term)
        })
        .collect()
}
