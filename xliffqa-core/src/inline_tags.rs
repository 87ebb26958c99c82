//! Inline-tag extraction
//!
//! Walks segment content in document order, accumulating plain text and a
//! typed tag list. Paired tags (`bpt`/`ept`, `bx`/`ex`) are tracked in a map
//! keyed by id, holding at most one open tag per id.
//!
//! Positions are character offsets into the plain text as it stands when the
//! tag is reached. For `<g>`, the position is recorded before its children
//! are appended.

use crate::error::{ParserError, Result};
use crate::model::{InlineTag, InlineTagType};
use crate::xml::{XmlElement, XmlNode};
use std::collections::BTreeMap;

/// Plain text and tags extracted from one piece of segment content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText {
    pub plain_text: String,
    pub tags: Vec<InlineTag>,
}

/// Which opener a pending close must match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PairKind {
    Bpt,
    Bx,
}

impl PairKind {
    fn opener_name(self) -> &'static str {
        match self {
            PairKind::Bpt => "bpt",
            PairKind::Bx => "bx",
        }
    }
}

#[derive(Debug, Default)]
struct Extractor {
    plain_text: String,
    char_len: usize,
    tags: Vec<InlineTag>,
    open_pairs: BTreeMap<String, PairKind>,
}

impl Extractor {
    fn walk(&mut self, nodes: &[XmlNode]) -> Result<()> {
        for node in nodes {
            match node {
                XmlNode::Text(text) => {
                    self.plain_text.push_str(text);
                    self.char_len += text.chars().count();
                }
                XmlNode::Element(element) => match inline_type(element) {
                    Some(tag_type) => self.visit_tag(tag_type, element)?,
                    // Non-inline elements are transparent
                    None => self.walk(&element.children)?,
                },
            }
        }
        Ok(())
    }

    fn visit_tag(&mut self, tag_type: InlineTagType, element: &XmlElement) -> Result<()> {
        let id = element_id(element);
        match tag_type {
            InlineTagType::G => {
                self.push(tag_type, element, &id, None);
                self.walk(&element.children)?;
            }
            InlineTagType::X | InlineTagType::Ph => self.push(tag_type, element, &id, None),
            InlineTagType::Bpt => {
                let content = element.direct_text();
                let content = (!content.is_empty()).then_some(content);
                self.push(tag_type, element, &id, content);
                self.open_pairs.insert(pair_key(element, &id), PairKind::Bpt);
            }
            InlineTagType::Bx => {
                self.push(tag_type, element, &id, None);
                self.open_pairs.insert(pair_key(element, &id), PairKind::Bx);
            }
            InlineTagType::Ept => self.close(PairKind::Bpt, tag_type, element, &id)?,
            InlineTagType::Ex => self.close(PairKind::Bx, tag_type, element, &id)?,
        }
        Ok(())
    }

    fn close(
        &mut self,
        expected: PairKind,
        tag_type: InlineTagType,
        element: &XmlElement,
        id: &str,
    ) -> Result<()> {
        let key = pair_key(element, id);
        match self.open_pairs.get(&key) {
            Some(kind) if *kind == expected => {
                self.open_pairs.remove(&key);
                self.push(tag_type, element, id, None);
                Ok(())
            }
            _ => Err(ParserError::tag_mismatch(
                format!(
                    "<{tag_type}> with id \"{key}\" has no matching <{}>",
                    expected.opener_name()
                ),
                key,
            )),
        }
    }

    fn push(
        &mut self,
        tag_type: InlineTagType,
        element: &XmlElement,
        id: &str,
        content: Option<String>,
    ) {
        self.tags.push(InlineTag {
            tag_type,
            id: id.to_string(),
            position: self.char_len,
            attributes: extra_attributes(element),
            content,
        });
    }

    fn finish(self) -> Result<ExtractedText> {
        if let Some((id, kind)) = self.open_pairs.iter().next() {
            let ids: Vec<&str> = self.open_pairs.keys().map(String::as_str).collect();
            return Err(ParserError::tag_mismatch(
                format!("Unclosed <{}> with id \"{id}\"", kind.opener_name()),
                ids.join(", "),
            ));
        }
        Ok(ExtractedText {
            plain_text: self.plain_text,
            tags: self.tags,
        })
    }
}

fn inline_type(element: &XmlElement) -> Option<InlineTagType> {
    InlineTagType::from_element_name(element.local_name())
}

fn element_id(element: &XmlElement) -> String {
    element
        .attr("id")
        .or_else(|| element.attr("mid"))
        .unwrap_or_default()
        .to_string()
}

/// Closers may point at their opener through `rid`
fn pair_key(element: &XmlElement, id: &str) -> String {
    element.attr("rid").unwrap_or(id).to_string()
}

fn extra_attributes(element: &XmlElement) -> Option<BTreeMap<String, String>> {
    let attrs: BTreeMap<String, String> = element
        .attributes
        .iter()
        .filter(|(key, _)| !matches!(key.as_str(), "id" | "mid"))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    (!attrs.is_empty()).then_some(attrs)
}

/// Extract plain text and inline tags from ordered content nodes
///
/// Fails with `TAG_MISMATCH` when a closer has no opener or an opener is
/// never closed. No partial tag list is returned on failure.
pub fn extract_inline_tags(nodes: &[XmlNode]) -> Result<ExtractedText> {
    let mut extractor = Extractor::default();
    extractor.walk(nodes)?;
    extractor.finish()
}
