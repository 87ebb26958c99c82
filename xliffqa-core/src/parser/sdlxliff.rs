//! SDLXLIFF trans-units
//!
//! A trans-unit holds one `<mrk mtype="seg">` per segment inside
//! `<seg-source>` and `<target>`, each paired by `mid` with an `<sdl:seg>`
//! record in `<sdl:seg-defs>` carrying `conf` and `percent`.

use super::{xliff, SegmentDraft, SegmentSink};
use crate::constants::COMMENT_SEPARATOR;
use crate::error::Result;
use crate::inline_tags::extract_inline_tags;
use crate::parser::states::from_sdl_conf;
use crate::xml::XmlElement;
use std::collections::HashMap;

/// Comment definitions keyed by id, from `<cmt-defs>`
pub(crate) type CommentDefs = HashMap<String, String>;

pub(crate) fn comment_definitions(root: &XmlElement) -> CommentDefs {
    root.find_all(&|e: &XmlElement| e.local_name() == "cmt-def")
        .into_iter()
        .filter_map(|def| {
            let id = def.attr("id")?.to_string();
            let texts: Vec<String> = def
                .find_all(&|e: &XmlElement| e.local_name() == "Comment")
                .into_iter()
                .map(|c| c.text_content().trim().to_string())
                .filter(|t| !t.is_empty())
                .collect();
            let text = if texts.is_empty() {
                def.text_content().trim().to_string()
            } else {
                texts.join(COMMENT_SEPARATOR)
            };
            (!text.is_empty()).then_some((id, text))
        })
        .collect()
}

/// Read one `<trans-unit>`, emitting a segment per source mark
pub(crate) fn read_unit(
    unit: &XmlElement,
    comment_defs: &CommentDefs,
    sink: &mut SegmentSink,
) -> Result<()> {
    let source_marks = unit.child("seg-source").map(seg_marks).unwrap_or_default();
    if source_marks.is_empty() {
        return xliff::read_unit(unit, sink);
    }

    let target_marks: HashMap<&str, &XmlElement> = unit
        .child("target")
        .map(seg_marks)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|mark| mark.attr("mid").map(|mid| (mid, mark)))
        .collect();
    let seg_defs = seg_definitions(unit);
    let notes = xliff::notes(unit);

    for mark in source_marks {
        let mid = mark.attr("mid").unwrap_or_default();
        let target_mark = target_marks.get(mid).copied();
        let source = extract_inline_tags(&mark.children)?;
        let target = match target_mark {
            Some(target) => extract_inline_tags(&target.children)?,
            None => Default::default(),
        };

        let def = seg_defs.get(mid).copied();
        let state = def.and_then(|d| d.attr("conf")).and_then(from_sdl_conf);
        let match_percentage = def.map(|d| d.attr("percent").and_then(parse_percent).unwrap_or(0));

        let mut comments = notes.clone();
        let mut refs = def.map(comment_refs).unwrap_or_default();
        refs.extend(inline_comment_refs(mark));
        if let Some(target) = target_mark {
            refs.extend(inline_comment_refs(target));
        }
        for text in refs.iter().filter_map(|id| comment_defs.get(*id)) {
            if !comments.contains(text) {
                comments.push(text.clone());
            }
        }

        sink.push(SegmentDraft {
            id: mid.to_string(),
            source,
            target,
            state,
            match_percentage,
            comments,
        });
    }
    Ok(())
}

fn seg_marks(container: &XmlElement) -> Vec<&XmlElement> {
    container.find_all(&|e: &XmlElement| e.local_name() == "mrk" && e.attr("mtype") == Some("seg"))
}

fn seg_definitions(unit: &XmlElement) -> HashMap<&str, &XmlElement> {
    unit.child("seg-defs")
        .map(|defs| {
            defs.child_elements()
                .filter(|e| e.local_name() == "seg")
                .filter_map(|seg| seg.attr("id").map(|id| (id, seg)))
                .collect()
        })
        .unwrap_or_default()
}

/// Ids of `<sdl:cmt id="">` children of a seg record
fn comment_refs(def: &XmlElement) -> Vec<&str> {
    def.child_elements()
        .filter(|e| e.local_name() == "cmt")
        .filter_map(|e| e.attr("id"))
        .collect()
}

/// Ids of `<mrk mtype="x-sdl-comment" sdl:cid="">` marks inside a segment
fn inline_comment_refs(mark: &XmlElement) -> Vec<&str> {
    mark.find_all(&|e: &XmlElement| {
        e.local_name() == "mrk" && e.attr("mtype") == Some("x-sdl-comment")
    })
    .into_iter()
    .filter_map(|e| e.attr("cid"))
    .collect()
}

fn parse_percent(raw: &str) -> Option<u8> {
    let value: f64 = raw.trim().trim_end_matches('%').parse().ok()?;
    value.is_finite().then(|| value.round().clamp(0.0, 100.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_percent() {
        assert_eq!(parse_percent("100"), Some(100));
        assert_eq!(parse_percent(" 85% "), Some(85));
        assert_eq!(parse_percent("120"), Some(100));
        assert_eq!(parse_percent("n/a"), None);
    }
}
