//! Order-preserving XML node tree
//!
//! The reader keeps text and element nodes in document order, which the
//! inline-tag extractor relies on for position tracking.

use crate::error::{ParserError, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

/// A node in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Text(String),
    Element(XmlElement),
}

impl XmlNode {
    pub fn text(value: impl Into<String>) -> Self {
        XmlNode::Text(value.into())
    }

    pub fn as_element(&self) -> Option<&XmlElement> {
        match self {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        }
    }
}

/// An element with its qualified name, attributes and ordered children
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Qualified name as written (`sdl:seg`)
    pub name: String,
    /// Attributes in document order, keyed by qualified name
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: XmlNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(XmlNode::Text(text.into()))
    }

    /// Name without namespace prefix
    pub fn local_name(&self) -> &str {
        local_part(&self.name)
    }

    /// Attribute value by qualified or local name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .or_else(|| self.attributes.iter().find(|(key, _)| local_part(key) == name))
            .map(|(_, value)| value.as_str())
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(XmlNode::as_element)
    }

    /// First direct child element with the given local name
    pub fn child(&self, local_name: &str) -> Option<&XmlElement> {
        self.child_elements().find(|e| e.local_name() == local_name)
    }

    /// Concatenation of direct text children
    pub fn direct_text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                XmlNode::Text(text) => Some(text.as_str()),
                XmlNode::Element(_) => None,
            })
            .collect()
    }

    /// Concatenation of all descendant text
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Pre-order search for descendants matching `pred`, not descending into matches
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&XmlElement) -> bool) -> Vec<&'a XmlElement> {
        let mut found = Vec::new();
        find_into(&self.children, pred, &mut found);
        found
    }
}

fn local_part(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}

fn collect_text(nodes: &[XmlNode], out: &mut String) {
    for node in nodes {
        match node {
            XmlNode::Text(text) => out.push_str(text),
            XmlNode::Element(element) => collect_text(&element.children, out),
        }
    }
}

fn find_into<'a>(
    nodes: &'a [XmlNode],
    pred: &dyn Fn(&XmlElement) -> bool,
    found: &mut Vec<&'a XmlElement>,
) {
    for element in nodes.iter().filter_map(XmlNode::as_element) {
        if pred(element) {
            found.push(element);
        } else {
            find_into(&element.children, pred, found);
        }
    }
}

/// Read a document into its top-level nodes
pub fn parse_nodes(text: &str) -> Result<Vec<XmlNode>> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(false);

    let mut roots: Vec<XmlNode> = Vec::new();
    let mut stack: Vec<XmlElement> = Vec::new();

    loop {
        let event = reader.read_event().map_err(|e| {
            ParserError::invalid_xml(format!("at byte {}: {e}", reader.buffer_position()))
        })?;

        match event {
            Event::Start(start) => stack.push(element_from(&start)?),
            Event::Empty(start) => {
                let element = element_from(&start)?;
                attach(&mut stack, &mut roots, XmlNode::Element(element));
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| ParserError::invalid_xml("unexpected closing tag"))?;
                attach(&mut stack, &mut roots, XmlNode::Element(element));
            }
            Event::Text(raw) => {
                let value = raw
                    .unescape()
                    .map_err(|e| ParserError::invalid_xml(e.to_string()))?;
                if !value.is_empty() {
                    attach(&mut stack, &mut roots, XmlNode::Text(value.into_owned()));
                }
            }
            Event::CData(data) => {
                let value = String::from_utf8_lossy(&data).into_owned();
                attach(&mut stack, &mut roots, XmlNode::Text(value));
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions and doctypes carry no content
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(ParserError::invalid_xml(format!(
            "unclosed element <{}>",
            open.name
        )));
    }

    Ok(roots)
}

fn element_from(start: &BytesStart<'_>) -> Result<XmlElement> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = XmlElement::new(name);
    for attr in start.attributes() {
        let attr = attr.map_err(|e| ParserError::invalid_xml(e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| ParserError::invalid_xml(e.to_string()))?
            .into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn attach(stack: &mut [XmlElement], roots: &mut Vec<XmlNode>, node: XmlNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => roots.push(node),
    }
}
