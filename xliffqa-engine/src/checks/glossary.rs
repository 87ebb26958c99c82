//! Glossary compliance through the injected matcher

use crate::context::SegmentCheckContext;
use crate::error::GlossaryError;
use crate::finding::{RuleCategory, RuleCheckResult, Severity};
use crate::glossary::{contains_term, GlossaryMatcher, GlossarySegmentContext};
use xliffqa_core::{GlossaryTermRecord, SegmentRecord};

/// Terms whose source side occurs in `source_text`
pub fn prefilter_terms(source_text: &str, terms: &[GlossaryTermRecord]) -> Vec<GlossaryTermRecord> {
    terms
        .iter()
        .filter(|t| !t.target_term.trim().is_empty())
        .filter(|t| contains_term(source_text, &t.source_term, t.case_sensitive))
        .cloned()
        .collect()
}

/// Flag every candidate term the matcher reports missing
///
/// Low-confidence matches are not flagged. Matcher errors propagate.
pub async fn check_glossary_compliance(
    segment: &SegmentRecord,
    terms: &[GlossaryTermRecord],
    ctx: &SegmentCheckContext,
    matcher: &dyn GlossaryMatcher,
) -> Result<Vec<RuleCheckResult>, GlossaryError> {
    let s = &segment.segment;
    if s.target_text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let candidates = prefilter_terms(&s.source_text, terms);
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let context = GlossarySegmentContext {
        segment_id: &segment.id,
        source_text: &s.source_text,
        source_lang: &ctx.source_lang,
    };
    let result = matcher
        .match_terms(&s.target_text, &candidates, &ctx.target_lang, &context)
        .await?;

    Ok(result
        .missing_terms
        .iter()
        .filter_map(|id| candidates.iter().find(|t| &t.id == id))
        .map(|term| {
            RuleCheckResult::new(
                segment,
                RuleCategory::GlossaryCompliance,
                Severity::Major,
                format!(
                    "Glossary term \"{}\" should be translated as \"{}\"",
                    term.source_term, term.target_term
                ),
            )
            .with_suggested_fix(term.target_term.clone())
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glossary::{BoundaryGlossaryMatcher, FnGlossaryMatcher, GlossaryMatchResult};
    use crate::test_support::en_th;

    fn term(id: &str, source: &str, target: &str) -> GlossaryTermRecord {
        GlossaryTermRecord {
            id: id.into(),
            glossary_id: "g".into(),
            source_term: source.into(),
            target_term: target.into(),
            case_sensitive: false,
        }
    }

    fn ctx() -> SegmentCheckContext {
        SegmentCheckContext::new("en-US", "th-TH")
    }

    #[test]
    fn test_prefilter_keeps_terms_present_in_source() {
        let terms = vec![term("1", "database", "ฐานข้อมูล"), term("2", "server", "เซิร์ฟเวอร์")];
        let kept = prefilter_terms("Open the Database", &terms);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "1");
    }

    #[tokio::test]
    async fn test_missing_term_is_major() {
        let terms = vec![term("1", "database", "ฐานข้อมูล")];
        let segment = en_th("Open the database", "เปิดระบบ");
        let findings = check_glossary_compliance(&segment, &terms, &ctx(), &BoundaryGlossaryMatcher)
            .await
            .unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].category, RuleCategory::GlossaryCompliance);
        assert_eq!(findings[0].suggested_fix.as_deref(), Some("ฐานข้อมูล"));
    }

    #[tokio::test]
    async fn test_low_confidence_is_not_flagged() {
        let matcher = FnGlossaryMatcher::new(|_target, terms, _lang, _ctx| {
            Ok(GlossaryMatchResult {
                low_confidence_matches: terms.iter().map(|t| t.id.clone()).collect(),
                ..Default::default()
            })
        });
        let terms = vec![term("1", "database", "ฐานข้อมูล")];
        let segment = en_th("Open the database", "เปิดฐานข้อมูล");
        let findings = check_glossary_compliance(&segment, &terms, &ctx(), &matcher)
            .await
            .unwrap();
        assert!(findings.is_empty());
    }

    #[tokio::test]
    async fn test_matcher_is_not_called_without_candidates() {
        let matcher = FnGlossaryMatcher::new(|_target, _terms, _lang, _ctx| {
            Err(GlossaryError::new("should not be called"))
        });
        let terms = vec![term("1", "database", "ฐานข้อมูล")];
        let segment = en_th("Open the file", "เปิดไฟล์");
        assert!(check_glossary_compliance(&segment, &terms, &ctx(), &matcher)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_matcher_error_propagates() {
        let matcher = FnGlossaryMatcher::new(|_target, _terms, _lang, _ctx| {
            Err(GlossaryError::new("backend unavailable"))
        });
        let terms = vec![term("1", "database", "ฐานข้อมูล")];
        let segment = en_th("Open the database", "เปิด");
        let err = check_glossary_compliance(&segment, &terms, &ctx(), &matcher)
            .await
            .unwrap_err();
        assert_eq!(err, GlossaryError::new("backend unavailable"));
    }
}
