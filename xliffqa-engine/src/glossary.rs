//! Glossary matcher seam
//!
//! The engine never looks a matcher up on its own. Callers inject one through
//! [`RuleEngine::new`](crate::RuleEngine::new); tests pass a closure through
//! [`FnGlossaryMatcher`].

use crate::error::GlossaryError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;
use xliffqa_core::language::{nfkc, uses_word_spacing};
use xliffqa_core::GlossaryTermRecord;

/// Term ids sorted into the three match outcomes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryMatchResult {
    pub matches: Vec<String>,
    pub missing_terms: Vec<String>,
    /// Hits that split a word; reported but never flagged
    pub low_confidence_matches: Vec<String>,
}

/// Segment details passed along with a lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlossarySegmentContext<'a> {
    pub segment_id: &'a str,
    pub source_text: &'a str,
    pub source_lang: &'a str,
}

/// Decides which expected target terms a translation contains
#[async_trait]
pub trait GlossaryMatcher: Send + Sync {
    async fn match_terms(
        &self,
        target_text: &str,
        terms: &[GlossaryTermRecord],
        target_lang: &str,
        context: &GlossarySegmentContext<'_>,
    ) -> Result<GlossaryMatchResult, GlossaryError>;
}

/// Adapts a synchronous function into a [`GlossaryMatcher`]
pub struct FnGlossaryMatcher<F>(F);

impl<F> FnGlossaryMatcher<F>
where
    F: Fn(
            &str,
            &[GlossaryTermRecord],
            &str,
            &GlossarySegmentContext<'_>,
        ) -> Result<GlossaryMatchResult, GlossaryError>
        + Send
        + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[async_trait]
impl<F> GlossaryMatcher for FnGlossaryMatcher<F>
where
    F: Fn(
            &str,
            &[GlossaryTermRecord],
            &str,
            &GlossarySegmentContext<'_>,
        ) -> Result<GlossaryMatchResult, GlossaryError>
        + Send
        + Sync,
{
    async fn match_terms(
        &self,
        target_text: &str,
        terms: &[GlossaryTermRecord],
        target_lang: &str,
        context: &GlossarySegmentContext<'_>,
    ) -> Result<GlossaryMatchResult, GlossaryError> {
        (self.0)(target_text, terms, target_lang, context)
    }
}

/// Outcome for a single term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermMatch {
    Match,
    LowConfidence,
    Missing,
}

/// Built-in matcher over NFKC text with word-boundary confidence
///
/// For space-delimited languages a hit must not touch an alphanumeric
/// character on either side. For Thai and CJK both edges must fall on
/// Unicode word boundaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundaryGlossaryMatcher;

impl BoundaryGlossaryMatcher {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, target_text: &str, term: &GlossaryTermRecord, target_lang: &str) -> TermMatch {
        let needle = fold(term.target_term.trim(), term.case_sensitive);
        if needle.is_empty() {
            return TermMatch::Match;
        }
        let haystack = fold(target_text, term.case_sensitive);
        let spaced = uses_word_spacing(target_lang);

        let mut hits = haystack.match_indices(needle.as_str()).peekable();
        if hits.peek().is_none() {
            return TermMatch::Missing;
        }
        let bounds = (!spaced).then(|| word_bounds(&haystack));
        let clean = hits.any(|(start, hit)| {
            let end = start + hit.len();
            match &bounds {
                Some(bounds) => bounds.binary_search(&start).is_ok() && bounds.binary_search(&end).is_ok(),
                None => alphanumeric_edges_clear(&haystack, start, end),
            }
        });
        if clean {
            TermMatch::Match
        } else {
            TermMatch::LowConfidence
        }
    }
}

#[async_trait]
impl GlossaryMatcher for BoundaryGlossaryMatcher {
    async fn match_terms(
        &self,
        target_text: &str,
        terms: &[GlossaryTermRecord],
        target_lang: &str,
        _context: &GlossarySegmentContext<'_>,
    ) -> Result<GlossaryMatchResult, GlossaryError> {
        let mut result = GlossaryMatchResult::default();
        for term in terms {
            let bucket = match self.classify(target_text, term, target_lang) {
                TermMatch::Match => &mut result.matches,
                TermMatch::LowConfidence => &mut result.low_confidence_matches,
                TermMatch::Missing => &mut result.missing_terms,
            };
            bucket.push(term.id.clone());
        }
        Ok(result)
    }
}

fn fold(text: &str, case_sensitive: bool) -> String {
    let normalized = nfkc(text);
    if case_sensitive {
        normalized
    } else {
        normalized.to_lowercase()
    }
}

/// Unicode word-boundary offsets, including both ends
fn word_bounds(text: &str) -> Vec<usize> {
    let mut bounds: Vec<usize> = text.split_word_bound_indices().map(|(i, _)| i).collect();
    bounds.push(text.len());
    bounds
}

fn alphanumeric_edges_clear(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

/// Whether `term` occurs in `text` after NFKC, honoring the case flag
pub(crate) fn contains_term(text: &str, term: &str, case_sensitive: bool) -> bool {
    let needle = fold(term.trim(), case_sensitive);
    !needle.is_empty() && fold(text, case_sensitive).contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(id: &str, source: &str, target: &str, case_sensitive: bool) -> GlossaryTermRecord {
        GlossaryTermRecord {
            id: id.into(),
            glossary_id: "g".into(),
            source_term: source.into(),
            target_term: target.into(),
            case_sensitive,
        }
    }

    #[test]
    fn test_space_delimited_boundaries() {
        let matcher = BoundaryGlossaryMatcher::new();
        let t = term("1", "cat", "Katze", false);
        assert_eq!(matcher.classify("Die katze schläft", &t, "de"), TermMatch::Match);
        assert_eq!(matcher.classify("Die Katzen schlafen", &t, "de"), TermMatch::LowConfidence);
        assert_eq!(matcher.classify("Der Hund", &t, "de"), TermMatch::Missing);
    }

    #[test]
    fn test_case_sensitive_terms() {
        let matcher = BoundaryGlossaryMatcher::new();
        let t = term("1", "Apple", "Apple", true);
        assert_eq!(matcher.classify("apple pie", &t, "en"), TermMatch::Missing);
        assert_eq!(matcher.classify("Apple pie", &t, "en"), TermMatch::Match);
    }

    #[test]
    fn test_thai_hit_on_cluster_boundaries() {
        let matcher = BoundaryGlossaryMatcher::new();
        let t = term("1", "database", "ฐานข้อมูล", false);
        assert_eq!(matcher.classify("ฐานข้อมูลของเรา", &t, "th-TH"), TermMatch::Match);
        assert_eq!(matcher.classify("ระบบ", &t, "th-TH"), TermMatch::Missing);
    }

    #[test]
    fn test_fullwidth_target_matches_after_nfkc() {
        let matcher = BoundaryGlossaryMatcher::new();
        let t = term("1", "API", "API", true);
        assert_eq!(matcher.classify("ＡＰＩ を使う", &t, "ja"), TermMatch::Match);
    }

    #[tokio::test]
    async fn test_match_terms_buckets_by_outcome() {
        let matcher = BoundaryGlossaryMatcher::new();
        let terms = vec![
            term("a", "cat", "Katze", false),
            term("b", "dog", "Hund", false),
            term("c", "house", "Haus", false),
        ];
        let context = GlossarySegmentContext {
            segment_id: "1",
            source_text: "cat dog house",
            source_lang: "en",
        };
        let result = matcher
            .match_terms("Katze und Haustier", &terms, "de", &context)
            .await
            .unwrap();
        assert_eq!(result.matches, vec!["a"]);
        assert_eq!(result.missing_terms, vec!["b"]);
        assert_eq!(result.low_confidence_matches, vec!["c"]);
    }

    #[tokio::test]
    async fn test_fn_matcher_adapts_closures() {
        let matcher = FnGlossaryMatcher::new(|_target, terms, _lang, _ctx| {
            Ok(GlossaryMatchResult {
                missing_terms: terms.iter().map(|t| t.id.clone()).collect(),
                ..Default::default()
            })
        });
        let context = GlossarySegmentContext {
            segment_id: "1",
            source_text: "",
            source_lang: "en",
        };
        let result = matcher
            .match_terms("x", &[term("z", "a", "b", false)], "de", &context)
            .await
            .unwrap();
        assert_eq!(result.missing_terms, vec!["z"]);
    }

    #[test]
    fn test_contains_term() {
        assert!(contains_term("Open the Database", "database", false));
        assert!(!contains_term("Open the Database", "database", true));
        assert!(!contains_term("anything", "  ", false));
    }
}
