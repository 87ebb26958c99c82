//! Rule engine orchestrator
//!
//! One `process_file` call runs, in order: language context from the first
//! segment, skip-state filtering, per-segment checks, glossary compliance
//! fanned out over all segments, the file-level consistency checks, custom
//! rules, suppression, and finally excerpt truncation.

use crate::checks::consistency::{
    check_key_term_consistency, check_same_source_different_target,
    check_same_target_different_source,
};
use crate::checks::custom::{check_custom_rules, compile_custom_rules};
use crate::checks::glossary::check_glossary_compliance;
use crate::checks::SEGMENT_CHECKS;
use crate::config::EngineConfig;
use crate::context::{FileCheckContext, SegmentCheckContext};
use crate::error::Result;
use crate::finding::{RuleCategory, RuleCheckResult};
use crate::glossary::GlossaryMatcher;
use futures::future::try_join_all;
use std::collections::HashSet;
use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;
use xliffqa_core::{GlossaryTermRecord, SegmentRecord, SuppressionRuleRecord};

/// Deterministic QA over the segments of one file
#[derive(Clone)]
pub struct RuleEngine {
    matcher: Arc<dyn GlossaryMatcher>,
    config: EngineConfig,
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RuleEngine {
    /// Create an engine around an injected glossary matcher
    pub fn new(matcher: Arc<dyn GlossaryMatcher>) -> Self {
        Self::with_config(matcher, EngineConfig::default())
    }

    pub fn with_config(matcher: Arc<dyn GlossaryMatcher>, config: EngineConfig) -> Self {
        Self { matcher, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run every check over `segments` and return the surviving findings
    ///
    /// Output order is deterministic for the same input. A glossary matcher
    /// failure aborts the run and is returned unchanged; no partial findings
    /// are returned with it.
    pub async fn process_file(
        &self,
        segments: &[SegmentRecord],
        glossary_terms: &[GlossaryTermRecord],
        suppressed_categories: &HashSet<RuleCategory>,
        custom_rules: &[SuppressionRuleRecord],
    ) -> Result<Vec<RuleCheckResult>> {
        let Some(first) = segments.first() else {
            return Ok(Vec::new());
        };
        let ctx = SegmentCheckContext::from_segment(first);

        let active: Vec<&SegmentRecord> = segments
            .iter()
            .filter(|s| !self.config.skips(s.segment.confirmation_state))
            .collect();
        if active.is_empty() {
            log::debug!("all {} segments are in a skip state", segments.len());
            return Ok(Vec::new());
        }

        let mut findings: Vec<RuleCheckResult> = Vec::new();
        for &segment in &active {
            for check in SEGMENT_CHECKS {
                findings.extend(check(segment, &ctx));
            }
        }

        let glossary = try_join_all(active.iter().map(|segment| {
            check_glossary_compliance(segment, glossary_terms, &ctx, self.matcher.as_ref())
        }))
        .await?;
        findings.extend(glossary.into_iter().flatten());

        let file_ctx = FileCheckContext {
            segments: active.clone(),
            glossary_terms,
            target_lang: ctx.target_lang.clone(),
        };
        findings.extend(check_same_source_different_target(&file_ctx));
        findings.extend(check_same_target_different_source(&file_ctx));
        findings.extend(check_key_term_consistency(&file_ctx));

        let rules = compile_custom_rules(custom_rules, self.config.max_custom_pattern_len);
        for &segment in &active {
            findings.extend(check_custom_rules(segment, &rules));
        }

        let before = findings.len();
        findings.retain(|f| !suppressed_categories.contains(&f.category));

        let limit = self.config.excerpt_limit;
        for finding in &mut findings {
            let end = truncate_excerpt(&finding.source_excerpt, limit).len();
            finding.source_excerpt.truncate(end);
            let end = truncate_excerpt(&finding.target_excerpt, limit).len();
            finding.target_excerpt.truncate(end);
        }

        log::debug!(
            "{} findings over {} of {} segments ({} suppressed, {} custom rules)",
            findings.len(),
            active.len(),
            segments.len(),
            before - findings.len(),
            rules.len()
        );
        Ok(findings)
    }
}

/// Longest prefix of `text` of at most `limit` chars ending on a grapheme boundary
pub fn truncate_excerpt(text: &str, limit: usize) -> &str {
    if text.chars().count() <= limit {
        return text;
    }
    let mut used = 0;
    let mut end = 0;
    for grapheme in text.graphemes(true) {
        let chars = grapheme.chars().count();
        if used + chars > limit {
            break;
        }
        used += chars;
        end += grapheme.len();
    }
    &text[..end]
}

/// Split caller rows into suppressed categories and custom rules
///
/// Inactive rows are ignored. Category names that are not known are logged
/// and dropped.
pub fn split_suppression_rules(
    records: &[SuppressionRuleRecord],
) -> (HashSet<RuleCategory>, Vec<SuppressionRuleRecord>) {
    let mut categories = HashSet::new();
    let mut rules = Vec::new();
    for record in records.iter().filter(|r| r.is_active) {
        if record.is_custom_rule() {
            rules.push(record.clone());
            continue;
        }
        match record.category.parse::<RuleCategory>() {
            Ok(category) => {
                categories.insert(category);
            }
            Err(e) => log::warn!("suppression rule {} ignored: {e}", record.id),
        }
    }
    (categories, rules)
}
