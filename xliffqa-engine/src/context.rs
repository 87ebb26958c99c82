//! Language and file context handed to checks

use xliffqa_core::{GlossaryTermRecord, SegmentRecord};

/// Language pair for per-segment checks
///
/// Derived once per run from the first segment, so mixed-language batches
/// share one pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentCheckContext {
    pub source_lang: String,
    pub target_lang: String,
}

impl SegmentCheckContext {
    pub fn new(source_lang: impl Into<String>, target_lang: impl Into<String>) -> Self {
        Self {
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
        }
    }

    pub fn from_segment(segment: &SegmentRecord) -> Self {
        Self::new(
            segment.segment.source_lang.clone(),
            segment.segment.target_lang.clone(),
        )
    }
}

/// Input for cross-segment checks
#[derive(Debug, Clone)]
pub struct FileCheckContext<'a> {
    /// Active segments in input order
    pub segments: Vec<&'a SegmentRecord>,
    pub glossary_terms: &'a [GlossaryTermRecord],
    pub target_lang: String,
}
