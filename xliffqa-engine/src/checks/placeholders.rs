//! Placeholder tokens: `{0}`, `{{name}}`, `${var}`, `%s`, `%1$d`

use crate::context::SegmentCheckContext;
use crate::finding::{RuleCategory, RuleCheckResult, Severity};
use regex::Regex;
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::sync::LazyLock;
use xliffqa_core::SegmentRecord;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\$\{[^{}\s]+\}|\{\{[^{}]+\}\}|\{[^{}\s]*\}|%(?:\d+\$)?[-+0#]*\d*(?:\.\d+)?[sdifuxXeEgGc@]",
    )
    .expect("placeholder pattern is valid")
});

/// Distinct placeholder tokens in `text`
pub fn extract_placeholders(text: &str) -> BTreeSet<&str> {
    PLACEHOLDER.find_iter(text).map(|m| m.as_str()).collect()
}

/// `text` with every placeholder replaced by a space
pub fn strip_placeholders(text: &str) -> Cow<'_, str> {
    PLACEHOLDER.replace_all(text, " ")
}

pub fn check_placeholder_consistency(
    segment: &SegmentRecord,
    _ctx: &SegmentCheckContext,
) -> Vec<RuleCheckResult> {
    let s = &segment.segment;
    if s.target_text.trim().is_empty() {
        return Vec::new();
    }
    let source = extract_placeholders(&s.source_text);
    let target = extract_placeholders(&s.target_text);

    let missing = source.difference(&target).map(|token| {
        RuleCheckResult::new(
            segment,
            RuleCategory::PlaceholderIntegrity,
            Severity::Critical,
            format!("Placeholder {token} is missing in target"),
        )
    });
    let extra = target.difference(&source).map(|token| {
        RuleCheckResult::new(
            segment,
            RuleCategory::PlaceholderIntegrity,
            Severity::Critical,
            format!("Placeholder {token} in target does not exist in source"),
        )
    });
    missing.chain(extra).collect()
}
