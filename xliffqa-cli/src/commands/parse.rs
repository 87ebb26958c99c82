//! Parse command implementation

use crate::input::FileReader;
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use xliffqa_core::{parse_document, ParsedDocument, MAX_PARSE_BYTES};

/// Arguments for the parse command
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// XLIFF or SDLXLIFF file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: SegmentFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Largest accepted document in megabytes
    #[arg(long, value_name = "MB")]
    pub max_size_mb: Option<usize>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Formats for parsed segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SegmentFormat {
    /// The parsed document as JSON
    Json,
    /// A readable listing of segments
    Text,
}

impl ParseArgs {
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, false);

        let declared = FileReader::declared_file_type(&self.input)?;
        let text = FileReader::read_text(&self.input)?;
        let max_bytes = self
            .max_size_mb
            .map_or(MAX_PARSE_BYTES, |mb| mb.saturating_mul(1024 * 1024));
        let document = parse_document(&text, declared, max_bytes)
            .with_context(|| format!("Failed to parse {}", self.input.display()))?;
        log::info!(
            "{}: {} segments, {} words",
            self.input.display(),
            document.segment_count(),
            document.total_word_count()
        );

        let mut writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            )),
            None => Box::new(io::stdout().lock()),
        };
        match self.format {
            SegmentFormat::Json => {
                serde_json::to_writer_pretty(&mut writer, &document)?;
                writeln!(writer)?;
            }
            SegmentFormat::Text => write_listing(&mut writer, &document)?,
        }
        writer.flush()?;
        Ok(())
    }
}

fn write_listing(writer: &mut dyn Write, document: &ParsedDocument) -> io::Result<()> {
    writeln!(
        writer,
        "{} {} -> {}, {} segments, {} words",
        document.file_type,
        document.source_lang,
        document.target_lang,
        document.segment_count(),
        document.total_word_count()
    )?;
    for segment in &document.segments {
        let state = segment
            .confirmation_state
            .map(|s| s.as_str())
            .unwrap_or("-");
        write!(writer, "#{} [{}] {state}", segment.segment_number, segment.segment_id)?;
        if let Some(percent) = segment.match_percentage {
            write!(writer, " {percent}%")?;
        }
        writeln!(writer, " ({} words)", segment.word_count)?;
        writeln!(writer, "  source: {}", segment.source_text)?;
        writeln!(writer, "  target: {}", segment.target_text)?;
        if let Some(comment) = &segment.translator_comment {
            writeln!(writer, "  comment: {comment}")?;
        }
    }
    Ok(())
}
