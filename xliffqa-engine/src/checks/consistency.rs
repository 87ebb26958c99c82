//! Cross-segment consistency
//!
//! Texts are compared after NFKC and trimming. For Thai targets, trailing
//! politeness particles are stripped from target variants so `ครับ`/`ค่ะ`
//! endings do not count as different translations.

use crate::context::FileCheckContext;
use crate::finding::{RuleCategory, RuleCheckResult, Severity};
use crate::glossary::contains_term;
use std::collections::HashMap;
use xliffqa_core::language::{is_thai, normalize_for_comparison, strip_thai_particles};
use xliffqa_core::SegmentRecord;

fn target_variant(text: &str, thai: bool) -> String {
    let normalized = normalize_for_comparison(text);
    if thai {
        strip_thai_particles(&normalized).to_string()
    } else {
        normalized
    }
}

/// First-seen representative of each group
struct FirstSeen<'a> {
    variant: String,
    original: &'a str,
}

/// Group `segments` by `key` and flag every member whose variant differs from the first one
fn flag_divergent<'a>(
    segments: &[&'a SegmentRecord],
    key_of: impl Fn(&SegmentRecord) -> String,
    variant_of: impl Fn(&'a SegmentRecord) -> (String, &'a str),
    describe: impl Fn(&str) -> String,
) -> Vec<RuleCheckResult> {
    let mut groups: HashMap<String, FirstSeen<'a>> = HashMap::new();
    let mut findings = Vec::new();

    for &segment in segments {
        if segment.segment.target_text.trim().is_empty() {
            continue;
        }
        let key = key_of(segment);
        if key.is_empty() {
            continue;
        }
        let (variant, original) = variant_of(segment);
        match groups.get(&key) {
            None => {
                groups.insert(key, FirstSeen { variant, original });
            }
            Some(first) if first.variant != variant => {
                findings.push(
                    RuleCheckResult::new(
                        segment,
                        RuleCategory::Consistency,
                        Severity::Minor,
                        describe(first.original),
                    )
                    .with_suggested_fix(first.original),
                );
            }
            Some(_) => {}
        }
    }
    findings
}

/// Same source text translated in more than one way
pub fn check_same_source_different_target(ctx: &FileCheckContext<'_>) -> Vec<RuleCheckResult> {
    let thai = is_thai(&ctx.target_lang);
    flag_divergent(
        &ctx.segments,
        |s| normalize_for_comparison(&s.segment.source_text),
        |s| (target_variant(&s.segment.target_text, thai), s.segment.target_text.as_str()),
        |first| format!("Inconsistent translation: the same source was translated as \"{first}\" elsewhere"),
    )
}

/// One translation reused for different source texts
pub fn check_same_target_different_source(ctx: &FileCheckContext<'_>) -> Vec<RuleCheckResult> {
    let thai = is_thai(&ctx.target_lang);
    let mut findings = flag_divergent(
        &ctx.segments,
        |s| target_variant(&s.segment.target_text, thai),
        |s| (normalize_for_comparison(&s.segment.source_text), s.segment.source_text.as_str()),
        |first| format!("Inconsistent translation: the same target also translates \"{first}\""),
    );
    // The fix for a shared target is a new translation, not the other source
    for finding in &mut findings {
        finding.suggested_fix = None;
    }
    findings
}

/// Glossary terms translated in some occurrences but not others
pub fn check_key_term_consistency(ctx: &FileCheckContext<'_>) -> Vec<RuleCheckResult> {
    let mut findings = Vec::new();
    for term in ctx.glossary_terms {
        if term.source_term.trim().is_empty() || term.target_term.trim().is_empty() {
            continue;
        }
        let occurrences: Vec<&SegmentRecord> = ctx
            .segments
            .iter()
            .copied()
            .filter(|s| !s.segment.target_text.trim().is_empty())
            .filter(|s| contains_term(&s.segment.source_text, &term.source_term, term.case_sensitive))
            .collect();
        if occurrences.len() < 2 {
            continue;
        }
        let (with_term, without_term): (Vec<&SegmentRecord>, Vec<&SegmentRecord>) = occurrences
            .into_iter()
            .partition(|s| contains_term(&s.segment.target_text, &term.target_term, term.case_sensitive));
        if with_term.is_empty() {
            continue;
        }
        for segment in without_term {
            findings.push(
                RuleCheckResult::new(
                    segment,
                    RuleCategory::Consistency,
                    Severity::Major,
                    format!(
                        "Key term \"{}\" is translated as \"{}\" in {} other segment(s) but not here",
                        term.source_term,
                        term.target_term,
                        with_term.len()
                    ),
                )
                .with_suggested_fix(term.target_term.clone()),
            );
        }
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;
    use xliffqa_core::GlossaryTermRecord;

    fn file_ctx<'a>(segments: &'a [SegmentRecord], terms: &'a [GlossaryTermRecord]) -> FileCheckContext<'a> {
        FileCheckContext {
            segments: segments.iter().collect(),
            glossary_terms: terms,
            target_lang: "th-TH".into(),
        }
    }

    #[test]
    fn test_variant_after_first_is_flagged() {
        let segments = vec![
            record("a", "Hello", "สวัสดี", "th-TH"),
            record("b", "Hello", "หวัดดี", "th-TH"),
            record("c", " Hello ", "สวัสดี", "th-TH"),
        ];
        let findings = check_same_source_different_target(&file_ctx(&segments, &[]));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].segment_id, "b");
        assert_eq!(findings[0].severity, Severity::Minor);
        assert_eq!(findings[0].suggested_fix.as_deref(), Some("สวัสดี"));
    }

    #[test]
    fn test_thai_particles_do_not_split_variants() {
        let segments = vec![
            record("a", "Thank you", "ขอบคุณครับ", "th-TH"),
            record("b", "Thank you", "ขอบคุณค่ะ", "th-TH"),
        ];
        assert!(check_same_source_different_target(&file_ctx(&segments, &[])).is_empty());
    }

    #[test]
    fn test_untranslated_segments_are_ignored() {
        let segments = vec![
            record("a", "Hello", "", "th-TH"),
            record("b", "Hello", "สวัสดี", "th-TH"),
        ];
        assert!(check_same_source_different_target(&file_ctx(&segments, &[])).is_empty());
    }

    #[test]
    fn test_same_target_different_source() {
        let segments = vec![
            record("a", "Open", "เปิด", "th-TH"),
            record("b", "Start", "เปิด", "th-TH"),
        ];
        let findings = check_same_target_different_source(&file_ctx(&segments, &[]));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].segment_id, "b");
        assert!(findings[0].description.contains("Open"));
        assert!(findings[0].suggested_fix.is_none());
    }

    #[test]
    fn test_key_term_missing_in_one_occurrence() {
        let terms = vec![GlossaryTermRecord {
            id: "t1".into(),
            glossary_id: "g1".into(),
            source_term: "database".into(),
            target_term: "ฐานข้อมูล".into(),
            case_sensitive: false,
        }];
        let segments = vec![
            record("a", "Open the database", "เปิดฐานข้อมูล", "th-TH"),
            record("b", "Back up the Database", "สำรองข้อมูล", "th-TH"),
            record("c", "Close", "ปิด", "th-TH"),
        ];
        let findings = check_key_term_consistency(&file_ctx(&segments, &terms));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].segment_id, "b");
        assert_eq!(findings[0].severity, Severity::Major);
        assert_eq!(findings[0].suggested_fix.as_deref(), Some("ฐานข้อมูล"));
    }

    #[test]
    fn test_key_term_absent_everywhere_is_not_inconsistent() {
        let terms = vec![GlossaryTermRecord {
            id: "t1".into(),
            glossary_id: "g1".into(),
            source_term: "database".into(),
            target_term: "ฐานข้อมูล".into(),
            case_sensitive: false,
        }];
        let segments = vec![
            record("a", "database one", "หนึ่ง", "th-TH"),
            record("b", "database two", "สอง", "th-TH"),
        ];
        assert!(check_key_term_consistency(&file_ctx(&segments, &terms)).is_empty());
    }
}
