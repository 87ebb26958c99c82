//! Rule check library
//!
//! Every check is total over well-formed segments: it returns zero or more
//! findings and never fails. Only the glossary check is async, and only
//! because its matcher is.

pub mod capitalization;
pub mod completeness;
pub mod consistency;
pub mod custom;
pub mod formatting;
pub mod glossary;
pub mod numbers;
pub mod placeholders;
pub mod repeated;
pub mod tags;
pub mod urls;

use crate::context::SegmentCheckContext;
use crate::finding::RuleCheckResult;
use xliffqa_core::SegmentRecord;

/// Synchronous per-segment check
pub type SegmentCheck = fn(&SegmentRecord, &SegmentCheckContext) -> Vec<RuleCheckResult>;

/// Per-segment checks in the order the engine runs them
pub const SEGMENT_CHECKS: &[SegmentCheck] = &[
    completeness::check_untranslated,
    completeness::check_identical_to_source,
    tags::check_tag_integrity,
    numbers::check_number_consistency,
    placeholders::check_placeholder_consistency,
    formatting::check_double_spaces,
    formatting::check_edge_whitespace,
    formatting::check_unpaired_brackets,
    urls::check_url_integrity,
    formatting::check_end_punctuation,
    capitalization::check_cased_terms,
    repeated::check_repeated_words,
];
