//! Bilingual document parser
//!
//! Contract, in order:
//! 1. size guard before any XML work
//! 2. dialect detection by SDL namespace URI
//! 3. explicit structural validation (`<xliff>` root, at least one `<file>`)
//! 4. segment extraction in document order, numbered from 1 across files

mod sdlxliff;
pub mod states;
mod xliff;

use crate::constants::{COMMENT_SEPARATOR, MAX_PARSE_BYTES, SDL_NAMESPACE_URI};
use crate::error::{ParserError, Result};
use crate::inline_tags::ExtractedText;
use crate::model::{ConfirmationState, FileType, InlineTags, ParsedDocument, ParsedSegment};
use crate::word_count::count_words;
use crate::xml::{self, XmlElement, XmlNode};

/// Parser options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum accepted input size in bytes
    pub max_bytes: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_bytes: MAX_PARSE_BYTES,
        }
    }
}

/// Detect the dialect of a raw document
pub fn detect_file_type(text: &str) -> FileType {
    if text.contains(SDL_NAMESPACE_URI) {
        FileType::Sdlxliff
    } else {
        FileType::Xliff
    }
}

/// Parse a raw XLIFF or SDLXLIFF document into ordered segments
///
/// `declared` is the type the caller expects; the detected dialect wins when
/// they disagree.
pub fn parse_document(text: &str, declared: FileType, max_bytes: usize) -> Result<ParsedDocument> {
    if text.len() > max_bytes {
        return Err(ParserError::file_too_large(text.len(), max_bytes));
    }

    let file_type = detect_file_type(text);
    if file_type != declared {
        log::warn!("declared file type {declared} but content is {file_type}; parsing as {file_type}");
    }

    let nodes = xml::parse_nodes(text)?;
    let root = nodes
        .iter()
        .find_map(XmlNode::as_element)
        .filter(|root| root.local_name() == "xliff")
        .ok_or_else(|| ParserError::invalid_structure("<xliff>"))?;
    let files: Vec<&XmlElement> = root
        .child_elements()
        .filter(|e| e.local_name() == "file")
        .collect();
    if files.is_empty() {
        return Err(ParserError::invalid_structure("<file>"));
    }

    let comment_defs = match file_type {
        FileType::Sdlxliff => sdlxliff::comment_definitions(root),
        FileType::Xliff => Default::default(),
    };

    let mut sink = SegmentSink::default();
    let mut document_langs: Option<(String, String)> = None;
    for file in files {
        sink.source_lang = file.attr("source-language").unwrap_or_default().to_string();
        sink.target_lang = file.attr("target-language").unwrap_or_default().to_string();
        document_langs.get_or_insert_with(|| (sink.source_lang.clone(), sink.target_lang.clone()));

        for unit in file.find_all(&|e: &XmlElement| e.local_name() == "trans-unit") {
            if unit.attr("translate") == Some("no") {
                continue;
            }
            match file_type {
                FileType::Sdlxliff => sdlxliff::read_unit(unit, &comment_defs, &mut sink)?,
                FileType::Xliff => xliff::read_unit(unit, &mut sink)?,
            }
        }
    }

    let (source_lang, target_lang) = document_langs.unwrap_or_default();
    log::debug!(
        "parsed {} {file_type} segments ({source_lang} -> {target_lang})",
        sink.segments.len()
    );

    Ok(ParsedDocument {
        file_type,
        source_lang,
        target_lang,
        segments: sink.segments,
    })
}

/// Parse with explicit options
pub fn parse_document_with(
    text: &str,
    declared: FileType,
    options: &ParseOptions,
) -> Result<ParsedDocument> {
    parse_document(text, declared, options.max_bytes)
}

/// One segment as read from a trans-unit, before numbering
#[derive(Debug)]
pub(crate) struct SegmentDraft {
    pub id: String,
    pub source: ExtractedText,
    pub target: ExtractedText,
    pub state: Option<ConfirmationState>,
    pub match_percentage: Option<u8>,
    pub comments: Vec<String>,
}

/// Collects segments, numbering them across the whole document
#[derive(Debug, Default)]
pub(crate) struct SegmentSink {
    source_lang: String,
    target_lang: String,
    segments: Vec<ParsedSegment>,
}

impl SegmentSink {
    pub fn push(&mut self, draft: SegmentDraft) {
        let segment_number = self.segments.len() as u32 + 1;
        let segment_id = if draft.id.is_empty() {
            segment_number.to_string()
        } else {
            draft.id
        };
        let word_count = count_words(&draft.source.plain_text, &self.source_lang);
        let translator_comment =
            (!draft.comments.is_empty()).then(|| draft.comments.join(COMMENT_SEPARATOR));

        self.segments.push(ParsedSegment {
            segment_id,
            segment_number,
            source_text: draft.source.plain_text,
            target_text: draft.target.plain_text,
            source_lang: self.source_lang.clone(),
            target_lang: self.target_lang.clone(),
            confirmation_state: draft.state,
            match_percentage: draft.match_percentage,
            translator_comment,
            inline_tags: Some(InlineTags {
                source: draft.source.tags,
                target: draft.target.tags,
            }),
            word_count,
        });
    }
}
