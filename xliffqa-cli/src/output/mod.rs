//! Report formatting module

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use xliffqa_core::{FileType, ParsedDocument};
use xliffqa_engine::{FindingSummary, RuleCheckResult};

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Trait for check-report formatters
pub trait OutputFormatter: Send + Sync {
    /// Write or buffer the result of one input file
    fn format_file(&mut self, report: &FileReport) -> Result<()>;

    /// Write the run totals and flush
    fn finish(&mut self, summary: &FindingSummary) -> Result<()>;
}

/// Check outcome for one input file
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<FileType>,
    pub source_lang: String,
    pub target_lang: String,
    pub segment_count: usize,
    pub word_count: usize,
    pub findings: Vec<RuleCheckResult>,
    /// Set when the file could not be read or parsed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    pub fn checked(path: impl Into<String>, document: &ParsedDocument, findings: Vec<RuleCheckResult>) -> Self {
        Self {
            path: path.into(),
            file_type: Some(document.file_type),
            source_lang: document.source_lang.clone(),
            target_lang: document.target_lang.clone(),
            segment_count: document.segment_count(),
            word_count: document.total_word_count(),
            findings,
            error: None,
        }
    }

    pub fn failed(path: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            file_type: None,
            source_lang: String::new(),
            target_lang: String::new(),
            segment_count: 0,
            word_count: 0,
            findings: Vec::new(),
            error: Some(error.into()),
        }
    }
}

/// Report formats offered by `check`
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// One line per finding with a closing summary
    Text,
    /// Single JSON object with files and summary
    Json,
    /// Markdown tables per file
    Markdown,
}

/// Build the formatter for `format` over `writer`
pub fn create_formatter<W>(format: ReportFormat, writer: W) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        ReportFormat::Text => Box::new(TextFormatter::new(writer)),
        ReportFormat::Json => Box::new(JsonFormatter::new(writer)),
        ReportFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

/// Summary line shared by the text and markdown formats
pub(crate) fn summary_line(summary: &FindingSummary, files: usize) -> String {
    format!(
        "{} finding(s) in {} file(s): {} critical, {} major, {} minor",
        summary.total, files, summary.critical, summary.major, summary.minor
    )
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::{Arc, Mutex};
    use xliffqa_engine::{RuleCategory, Severity};

    /// Writer whose bytes stay readable after the formatter takes it
    #[derive(Clone, Default)]
    pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    pub fn finding(segment_id: &str, category: RuleCategory, severity: Severity) -> RuleCheckResult {
        RuleCheckResult {
            segment_id: segment_id.to_string(),
            category,
            severity,
            description: format!("{category} issue | in segment"),
            suggested_fix: Some("fixed text".to_string()),
            source_excerpt: "Page 42".to_string(),
            target_excerpt: "หน้า".to_string(),
        }
    }

    pub fn report() -> FileReport {
        FileReport {
            path: "strings.xlf".to_string(),
            file_type: Some(FileType::Xliff),
            source_lang: "en-US".to_string(),
            target_lang: "th-TH".to_string(),
            segment_count: 2,
            word_count: 5,
            findings: vec![
                finding("1", RuleCategory::Completeness, Severity::Critical),
                finding("2", RuleCategory::NumberFormat, Severity::Major),
            ],
            error: None,
        }
    }
}
