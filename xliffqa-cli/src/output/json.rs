//! JSON report formatter

use super::{FileReport, OutputFormatter};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use xliffqa_engine::FindingSummary;

/// Buffers file reports and writes one JSON document on finish
pub struct JsonFormatter<W: Write> {
    writer: W,
    files: Vec<FileReport>,
}

#[derive(Serialize)]
struct Report<'a> {
    files: &'a [FileReport],
    summary: &'a FindingSummary,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            files: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_file(&mut self, report: &FileReport) -> Result<()> {
        self.files.push(report.clone());
        Ok(())
    }

    fn finish(&mut self, summary: &FindingSummary) -> Result<()> {
        let report = Report {
            files: &self.files,
            summary,
        };
        serde_json::to_writer_pretty(&mut self.writer, &report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{report, SharedBuffer};

    #[test]
    fn test_single_document_with_summary() {
        let buffer = SharedBuffer::default();
        let mut formatter = JsonFormatter::new(buffer.clone());
        let report = report();
        formatter.format_file(&report).unwrap();
        formatter
            .format_file(&FileReport::failed("bad.xlf", "broken"))
            .unwrap();
        formatter
            .finish(&FindingSummary::from_findings(&report.findings))
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
        let files = value["files"].as_array().unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0]["fileType"], "xliff");
        assert_eq!(files[0]["findings"][0]["segmentId"], "1");
        assert_eq!(files[0]["findings"][1]["category"], "number_format");
        assert!(files[0].get("error").is_none());
        assert_eq!(files[1]["error"], "broken");
        assert_eq!(value["summary"]["total"], 2);
        assert_eq!(value["summary"]["byCategory"]["completeness"], 1);
    }
}
