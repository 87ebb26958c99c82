//! URL integrity

use crate::context::SegmentCheckContext;
use crate::finding::{RuleCategory, RuleCheckResult, Severity};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;
use xliffqa_core::SegmentRecord;

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s<>"'“”]+"#).expect("url pattern is valid"));

/// URLs in `text` with trailing sentence punctuation removed
pub fn extract_urls(text: &str) -> Vec<&str> {
    URL.find_iter(text)
        .map(|m| m.as_str().trim_end_matches(['.', ',', ';', ':', '!', '?', ')', ']', '}']))
        .collect()
}

pub fn check_url_integrity(segment: &SegmentRecord, _ctx: &SegmentCheckContext) -> Vec<RuleCheckResult> {
    let s = &segment.segment;
    if s.target_text.trim().is_empty() {
        return Vec::new();
    }
    let target: BTreeSet<&str> = extract_urls(&s.target_text).into_iter().collect();
    let mut seen = BTreeSet::new();

    extract_urls(&s.source_text)
        .into_iter()
        .filter(|url| !target.contains(url) && seen.insert(*url))
        .map(|url| {
            RuleCheckResult::new(
                segment,
                RuleCategory::UrlIntegrity,
                Severity::Major,
                format!("URL {url} is missing or altered in target"),
            )
            .with_suggested_fix(url)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::en_th;

    fn ctx() -> SegmentCheckContext {
        SegmentCheckContext::new("en", "th")
    }

    #[test]
    fn test_trailing_punctuation_is_not_part_of_url() {
        assert_eq!(
            extract_urls("See https://example.com/docs. Or (http://a.b/c)"),
            vec!["https://example.com/docs", "http://a.b/c"]
        );
    }

    #[test]
    fn test_altered_url_is_major() {
        let segment = en_th("Visit https://example.com/en", "เยี่ยมชม https://example.com/th");
        let findings = check_url_integrity(&segment, &ctx());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Major);
        assert_eq!(findings[0].suggested_fix.as_deref(), Some("https://example.com/en"));
    }

    #[test]
    fn test_preserved_url_is_clean() {
        let segment = en_th("Visit https://example.com.", "เยี่ยมชม https://example.com");
        assert!(check_url_integrity(&segment, &ctx()).is_empty());
    }

    #[test]
    fn test_repeated_source_url_reported_once() {
        let segment = en_th("http://a.io and http://a.io", "ไม่มี");
        assert_eq!(check_url_integrity(&segment, &ctx()).len(), 1);
    }
}
