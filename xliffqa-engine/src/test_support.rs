//! Segment builders shared by unit tests

use xliffqa_core::{InlineTag, InlineTagType, InlineTags, ParsedSegment, SegmentRecord};

pub(crate) fn record(id: &str, source: &str, target: &str, target_lang: &str) -> SegmentRecord {
    SegmentRecord {
        id: id.to_string(),
        file_id: "file-1".into(),
        project_id: "project-1".into(),
        tenant_id: "tenant-1".into(),
        segment: ParsedSegment {
            segment_id: id.to_string(),
            segment_number: 1,
            source_text: source.to_string(),
            target_text: target.to_string(),
            source_lang: "en-US".into(),
            target_lang: target_lang.to_string(),
            confirmation_state: None,
            match_percentage: None,
            translator_comment: None,
            inline_tags: None,
            word_count: 0,
        },
    }
}

pub(crate) fn en_th(source: &str, target: &str) -> SegmentRecord {
    record("seg-1", source, target, "th-TH")
}

pub(crate) fn en_de(source: &str, target: &str) -> SegmentRecord {
    record("seg-1", source, target, "de-DE")
}

pub(crate) fn tag(tag_type: InlineTagType, id: &str) -> InlineTag {
    InlineTag {
        tag_type,
        id: id.to_string(),
        position: 0,
        attributes: None,
        content: None,
    }
}

pub(crate) fn with_tags(
    mut segment: SegmentRecord,
    source: Vec<InlineTag>,
    target: Vec<InlineTag>,
) -> SegmentRecord {
    segment.segment.inline_tags = Some(InlineTags { source, target });
    segment
}
