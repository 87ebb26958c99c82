//! Segment, tag and record types exchanged with callers
//!
//! Field names serialize in camelCase, matching the rows the persistence
//! layer stores and hands back.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The seven XLIFF inline element kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InlineTagType {
    /// Wrapping group `<g>`
    G,
    /// Standalone `<x/>`
    X,
    /// Placeholder `<ph>`
    Ph,
    /// Paired begin `<bx/>`
    Bx,
    /// Paired end `<ex/>`
    Ex,
    /// Paired begin with native code `<bpt>`
    Bpt,
    /// Paired end with native code `<ept>`
    Ept,
}

impl InlineTagType {
    pub const ALL: [InlineTagType; 7] = [
        InlineTagType::G,
        InlineTagType::X,
        InlineTagType::Ph,
        InlineTagType::Bx,
        InlineTagType::Ex,
        InlineTagType::Bpt,
        InlineTagType::Ept,
    ];

    /// Map an element local name to its tag type
    pub fn from_element_name(name: &str) -> Option<Self> {
        match name {
            "g" => Some(InlineTagType::G),
            "x" => Some(InlineTagType::X),
            "ph" => Some(InlineTagType::Ph),
            "bx" => Some(InlineTagType::Bx),
            "ex" => Some(InlineTagType::Ex),
            "bpt" => Some(InlineTagType::Bpt),
            "ept" => Some(InlineTagType::Ept),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InlineTagType::G => "g",
            InlineTagType::X => "x",
            InlineTagType::Ph => "ph",
            InlineTagType::Bx => "bx",
            InlineTagType::Ex => "ex",
            InlineTagType::Bpt => "bpt",
            InlineTagType::Ept => "ept",
        }
    }
}

impl fmt::Display for InlineTagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One inline markup element found inside segment text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineTag {
    #[serde(rename = "type")]
    pub tag_type: InlineTagType,
    pub id: String,
    /// Character offset into the plain text at the moment the tag opened
    pub position: usize,
    /// Attributes other than `id`/`mid`; absent when there are none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
    /// Native code carried by `<bpt>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Inline tags of both sides of a segment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineTags {
    pub source: Vec<InlineTag>,
    pub target: Vec<InlineTag>,
}

/// Translation workflow status of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfirmationState {
    Draft,
    Translated,
    RejectedTranslation,
    ApprovedTranslation,
    RejectedSignOff,
    ApprovedSignOff,
}

impl ConfirmationState {
    pub const ALL: [ConfirmationState; 6] = [
        ConfirmationState::Draft,
        ConfirmationState::Translated,
        ConfirmationState::RejectedTranslation,
        ConfirmationState::ApprovedTranslation,
        ConfirmationState::RejectedSignOff,
        ConfirmationState::ApprovedSignOff,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfirmationState::Draft => "Draft",
            ConfirmationState::Translated => "Translated",
            ConfirmationState::RejectedTranslation => "RejectedTranslation",
            ConfirmationState::ApprovedTranslation => "ApprovedTranslation",
            ConfirmationState::RejectedSignOff => "RejectedSignOff",
            ConfirmationState::ApprovedSignOff => "ApprovedSignOff",
        }
    }
}

impl fmt::Display for ConfirmationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfirmationState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| format!("unknown confirmation state: {s}"))
    }
}

/// Detected document dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    #[default]
    Xliff,
    Sdlxliff,
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Xliff => "xliff",
            FileType::Sdlxliff => "sdlxliff",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().trim_start_matches('.') {
            "xliff" | "xlf" => Ok(FileType::Xliff),
            "sdlxliff" => Ok(FileType::Sdlxliff),
            other => Err(format!("unsupported file type: {other}")),
        }
    }
}

/// One bilingual unit produced by the parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedSegment {
    pub segment_id: String,
    /// 1-based position across the whole document
    pub segment_number: u32,
    pub source_text: String,
    /// Empty string when untranslated
    pub target_text: String,
    pub source_lang: String,
    pub target_lang: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_state: Option<ConfirmationState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_percentage: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translator_comment: Option<String>,
    /// Absent for formats without an inline-tag concept
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_tags: Option<InlineTags>,
    pub word_count: usize,
}

/// Parser output for a whole document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDocument {
    pub file_type: FileType,
    pub source_lang: String,
    pub target_lang: String,
    pub segments: Vec<ParsedSegment>,
}

impl ParsedDocument {
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Sum of source word counts
    pub fn total_word_count(&self) -> usize {
        self.segments.iter().map(|s| s.word_count).sum()
    }
}

/// Identity fields attached by the persistence layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordScope {
    pub file_id: String,
    pub project_id: String,
    pub tenant_id: String,
}

/// Stored form of a segment, as handed to the rule engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentRecord {
    pub id: String,
    pub file_id: String,
    pub project_id: String,
    pub tenant_id: String,
    #[serde(flatten)]
    pub segment: ParsedSegment,
}

impl SegmentRecord {
    /// Attach identity fields to a parsed segment
    pub fn from_parsed(id: impl Into<String>, scope: &RecordScope, segment: ParsedSegment) -> Self {
        Self {
            id: id.into(),
            file_id: scope.file_id.clone(),
            project_id: scope.project_id.clone(),
            tenant_id: scope.tenant_id.clone(),
            segment,
        }
    }
}

/// Approved terminology pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryTermRecord {
    pub id: String,
    pub glossary_id: String,
    pub source_term: String,
    pub target_term: String,
    #[serde(default)]
    pub case_sensitive: bool,
}

/// Category name that turns a suppression row into a custom regex rule
pub const CUSTOM_RULE_CATEGORY: &str = "custom_rule";

/// Project-level category suppression or custom regex rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuppressionRuleRecord {
    pub id: String,
    pub project_id: String,
    pub tenant_id: String,
    pub pattern: String,
    pub category: String,
    pub reason: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl SuppressionRuleRecord {
    /// Whether `pattern` is a regex to run against target text
    pub fn is_custom_rule(&self) -> bool {
        self.category == CUSTOM_RULE_CATEGORY
    }
}
