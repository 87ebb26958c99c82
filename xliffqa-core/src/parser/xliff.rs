//! Plain XLIFF 1.2 trans-units

use super::{SegmentDraft, SegmentSink};
use crate::error::Result;
use crate::inline_tags::{extract_inline_tags, ExtractedText};
use crate::parser::states::from_xliff_state;
use crate::xml::XmlElement;

/// Read one `<trans-unit>` as a single segment
pub(crate) fn read_unit(unit: &XmlElement, sink: &mut SegmentSink) -> Result<()> {
    let Some(source) = unit.child("source") else {
        log::debug!(
            "trans-unit {:?} has no <source>; skipped",
            unit.attr("id").unwrap_or_default()
        );
        return Ok(());
    };

    let source = extract_inline_tags(&source.children)?;
    let target_element = unit.child("target");
    let target = match target_element {
        Some(target) => extract_inline_tags(&target.children)?,
        None => ExtractedText::default(),
    };
    let state = target_element
        .and_then(|t| t.attr("state"))
        .and_then(from_xliff_state);

    sink.push(SegmentDraft {
        id: unit.attr("id").unwrap_or_default().to_string(),
        source,
        target,
        state,
        match_percentage: None,
        comments: notes(unit),
    });
    Ok(())
}

/// Non-empty `<note>` texts of a trans-unit in document order
pub(crate) fn notes(unit: &XmlElement) -> Vec<String> {
    unit.child_elements()
        .filter(|e| e.local_name() == "note")
        .map(|note| note.text_content().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}
