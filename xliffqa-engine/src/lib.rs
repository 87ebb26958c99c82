//! Deterministic translation QA over bilingual segments
//!
//! The engine runs a fixed library of rule checks over the segments of one
//! file and returns findings. It holds no state between runs and performs no
//! I/O of its own; the only async step is the injected glossary matcher.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashSet;
//! use std::sync::Arc;
//! use xliffqa_core::{parse_document, FileType, RecordScope, SegmentRecord, MAX_PARSE_BYTES};
//! use xliffqa_engine::{BoundaryGlossaryMatcher, RuleCategory, RuleEngine};
//!
//! let xliff = r#"<xliff version="1.2"><file source-language="en" target-language="th"><body>
//!   <trans-unit id="1"><source>Page 42</source><target>หน้า</target></trans-unit>
//! </body></file></xliff>"#;
//! let doc = parse_document(xliff, FileType::Xliff, MAX_PARSE_BYTES).unwrap();
//! let scope = RecordScope::default();
//! let segments: Vec<SegmentRecord> = doc
//!     .segments
//!     .into_iter()
//!     .map(|s| SegmentRecord::from_parsed(s.segment_id.clone(), &scope, s))
//!     .collect();
//!
//! let engine = RuleEngine::new(Arc::new(BoundaryGlossaryMatcher));
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//! let findings = runtime
//!     .block_on(engine.process_file(&segments, &[], &HashSet::new(), &[]))
//!     .unwrap();
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].category, RuleCategory::NumberFormat);
//! ```

pub mod checks;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod finding;
pub mod glossary;
pub mod summary;

#[cfg(test)]
mod test_support;

pub use config::{EngineConfig, EngineConfigBuilder};
pub use context::{FileCheckContext, SegmentCheckContext};
pub use engine::{split_suppression_rules, truncate_excerpt, RuleEngine};
pub use error::{EngineError, GlossaryError, Result};
pub use finding::{RuleCategory, RuleCheckResult, Severity};
pub use glossary::{
    BoundaryGlossaryMatcher, FnGlossaryMatcher, GlossaryMatchResult, GlossaryMatcher,
    GlossarySegmentContext, TermMatch,
};
pub use summary::{finding_batches, FindingSummary};
