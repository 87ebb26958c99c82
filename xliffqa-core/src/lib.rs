//! Bilingual document parsing for translation QA
//!
//! This crate turns XLIFF and SDLXLIFF documents into ordered segment
//! records with inline-tag metadata and script-aware word counts, and holds
//! the language normalization tables the rule engine compares with.
//!
//! # Example
//!
//! ```rust
//! use xliffqa_core::{parse_document, FileType, MAX_PARSE_BYTES};
//!
//! let xliff = r#"<xliff version="1.2">
//!   <file source-language="en" target-language="th">
//!     <body>
//!       <trans-unit id="1">
//!         <source>Hello <x id="1"/>world</source>
//!         <target>สวัสดี<x id="1"/>ชาวโลก</target>
//!       </trans-unit>
//!     </body>
//!   </file>
//! </xliff>"#;
//!
//! let doc = parse_document(xliff, FileType::Xliff, MAX_PARSE_BYTES).unwrap();
//! assert_eq!(doc.segments.len(), 1);
//! assert_eq!(doc.segments[0].source_text, "Hello world");
//! assert_eq!(doc.segments[0].word_count, 2);
//! ```

pub mod constants;
pub mod error;
pub mod inline_tags;
pub mod language;
pub mod model;
pub mod parser;
pub mod word_count;
pub mod xml;

pub use constants::*;
pub use error::{ParserError, ParserErrorCode, Result};
pub use inline_tags::{extract_inline_tags, ExtractedText};
pub use model::{
    ConfirmationState, FileType, GlossaryTermRecord, InlineTag, InlineTagType, InlineTags,
    ParsedDocument, ParsedSegment, RecordScope, SegmentRecord, SuppressionRuleRecord,
    CUSTOM_RULE_CATEGORY,
};
pub use parser::{detect_file_type, parse_document, parse_document_with, ParseOptions};
pub use word_count::count_words;
pub use xml::{XmlElement, XmlNode};
