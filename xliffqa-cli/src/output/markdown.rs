//! Markdown report formatter

use super::{summary_line, FileReport, OutputFormatter};
use anyhow::Result;
use std::io::Write;
use xliffqa_engine::FindingSummary;

/// One table of findings per file
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    files: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, files: 0 }
    }
}

fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_file(&mut self, report: &FileReport) -> Result<()> {
        if self.files == 0 {
            writeln!(self.writer, "# QA report")?;
        }
        self.files += 1;
        writeln!(self.writer)?;
        writeln!(self.writer, "## {}", report.path)?;
        writeln!(self.writer)?;

        if let Some(error) = &report.error {
            writeln!(self.writer, "**Error:** {}", cell(error))?;
            return Ok(());
        }
        if report.findings.is_empty() {
            writeln!(self.writer, "No findings in {} segments.", report.segment_count)?;
            return Ok(());
        }

        writeln!(self.writer, "| Segment | Severity | Category | Description | Suggested fix |")?;
        writeln!(self.writer, "|---|---|---|---|---|")?;
        for finding in &report.findings {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} |",
                cell(&finding.segment_id),
                finding.severity,
                finding.category,
                cell(&finding.description),
                cell(finding.suggested_fix.as_deref().unwrap_or_default())
            )?;
        }
        Ok(())
    }

    fn finish(&mut self, summary: &FindingSummary) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*{}*", summary_line(summary, self.files))?;
        self.writer.flush()?;
        Ok(())
    }
}
