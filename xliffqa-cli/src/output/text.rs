//! Plain text report formatter

use super::{summary_line, FileReport, OutputFormatter};
use anyhow::Result;
use std::io::Write;
use xliffqa_engine::FindingSummary;

/// One line per finding, grouped under a file header
pub struct TextFormatter<W: Write> {
    writer: W,
    files: usize,
}

impl<W: Write> TextFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, files: 0 }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_file(&mut self, report: &FileReport) -> Result<()> {
        self.files += 1;
        if let Some(error) = &report.error {
            writeln!(self.writer, "{}: error: {error}", report.path)?;
            return Ok(());
        }

        let file_type = report.file_type.map(|t| t.as_str()).unwrap_or("unknown");
        writeln!(
            self.writer,
            "{} ({file_type}, {} -> {}, {} segments, {} words)",
            report.path, report.source_lang, report.target_lang, report.segment_count, report.word_count
        )?;
        for finding in &report.findings {
            writeln!(
                self.writer,
                "  [{}] {} segment {}: {}",
                finding.severity, finding.category, finding.segment_id, finding.description
            )?;
            if let Some(fix) = &finding.suggested_fix {
                writeln!(self.writer, "      fix: {fix}")?;
            }
        }
        Ok(())
    }

    fn finish(&mut self, summary: &FindingSummary) -> Result<()> {
        writeln!(self.writer, "{}", summary_line(summary, self.files))?;
        self.writer.flush()?;
        Ok(())
    }
}
