//! Inline tag integrity
//!
//! Tags are compared as multisets keyed by type and id. Missing and extra
//! instances are reported one finding each; a pure reordering of more than
//! one tag is reported once.

use crate::context::SegmentCheckContext;
use crate::finding::{RuleCategory, RuleCheckResult, Severity};
use std::collections::BTreeMap;
use xliffqa_core::{InlineTag, SegmentRecord};

type TagKey<'a> = (&'static str, &'a str);

fn key(tag: &InlineTag) -> TagKey<'_> {
    (tag.tag_type.as_str(), tag.id.as_str())
}

fn counts<'a>(keys: &[TagKey<'a>]) -> BTreeMap<TagKey<'a>, usize> {
    let mut counts = BTreeMap::new();
    for k in keys {
        *counts.entry(*k).or_insert(0) += 1;
    }
    counts
}

fn describe((tag_type, id): TagKey<'_>) -> String {
    format!("<{tag_type} id=\"{id}\">")
}

pub fn check_tag_integrity(segment: &SegmentRecord, _ctx: &SegmentCheckContext) -> Vec<RuleCheckResult> {
    let Some(tags) = &segment.segment.inline_tags else {
        return Vec::new();
    };
    let source: Vec<TagKey<'_>> = tags.source.iter().map(key).collect();
    let target: Vec<TagKey<'_>> = tags.target.iter().map(key).collect();
    let source_counts = counts(&source);
    let target_counts = counts(&target);

    let mut findings = Vec::new();
    for (k, &expected) in &source_counts {
        let found = target_counts.get(k).copied().unwrap_or(0);
        let missing = expected.saturating_sub(found);
        for _ in 0..missing {
            findings.push(RuleCheckResult::new(
                segment,
                RuleCategory::TagIntegrity,
                Severity::Critical,
                format!("Missing tag {} in target ({missing} missing)", describe(*k)),
            ));
        }
    }
    for (k, &found) in &target_counts {
        let expected = source_counts.get(k).copied().unwrap_or(0);
        let extra = found.saturating_sub(expected);
        for _ in 0..extra {
            findings.push(RuleCheckResult::new(
                segment,
                RuleCategory::TagIntegrity,
                Severity::Critical,
                format!("Extra tag {} in target ({extra} extra)", describe(*k)),
            ));
        }
    }

    if findings.is_empty() && source.len() > 1 && source != target {
        findings.push(RuleCheckResult::new(
            segment,
            RuleCategory::TagIntegrity,
            Severity::Minor,
            "Inline tags appear in a different order in target",
        ));
    }
    findings
}
