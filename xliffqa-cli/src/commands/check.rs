//! Check command implementation
//!
//! Each input is parsed, turned into segment records scoped to its path, and
//! run through the rule engine with the built-in glossary matcher. A file
//! that fails to read or parse is reported and the run continues; the
//! command fails at the end if any did.

use crate::config::{QaConfig, LOCAL_SCOPE};
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, FileReport, ReportFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use xliffqa_core::{
    parse_document, GlossaryTermRecord, RecordScope, SegmentRecord, SuppressionRuleRecord,
};
use xliffqa_engine::{
    split_suppression_rules, BoundaryGlossaryMatcher, FindingSummary, RuleCategory, RuleEngine,
};

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Input files, directories or glob patterns
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Project configuration file
    #[arg(short, long, value_name = "FILE", env = "XLIFFQA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Inputs shared by every file of one run
struct CheckRun {
    engine: RuleEngine,
    max_bytes: usize,
    glossary_terms: Vec<GlossaryTermRecord>,
    suppressed: HashSet<RuleCategory>,
    custom_rules: Vec<SuppressionRuleRecord>,
}

impl CheckArgs {
    pub async fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        let config = match &self.config {
            Some(path) => QaConfig::load(path)?,
            None => QaConfig::default(),
        };
        let files = resolve_patterns(&self.input)?;
        log::info!("checking {} file(s)", files.len());

        let (suppressed, custom_rules) = split_suppression_rules(&config.suppression_records());
        let run = CheckRun {
            engine: RuleEngine::with_config(
                Arc::new(BoundaryGlossaryMatcher::new()),
                config.engine_config()?,
            ),
            max_bytes: config.max_bytes(),
            glossary_terms: config.glossary_terms(),
            suppressed,
            custom_rules,
        };

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            )),
            None => Box::new(io::stdout()),
        };
        let mut formatter = create_formatter(self.format, writer);

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let mut summary = FindingSummary::default();
        let mut failed = 0usize;
        for path in &files {
            let report = match run.check_file(path).await {
                Ok(report) => report,
                Err(err) => {
                    failed += 1;
                    log::error!("{}: {err:#}", path.display());
                    FileReport::failed(path.display().to_string(), format!("{err:#}"))
                }
            };
            summary.merge(&FindingSummary::from_findings(&report.findings));
            formatter.format_file(&report)?;
            progress.file_completed(&path.display().to_string());
        }
        progress.finish();
        formatter.finish(&summary)?;

        if failed > 0 {
            return Err(CliError::ProcessingError(format!(
                "{failed} of {} file(s) failed to parse",
                files.len()
            ))
            .into());
        }
        Ok(())
    }
}

impl CheckRun {
    async fn check_file(&self, path: &Path) -> Result<FileReport> {
        let name = path.display().to_string();
        let declared = FileReader::declared_file_type(path)?;
        let text = FileReader::read_text(path)?;
        let document = parse_document(&text, declared, self.max_bytes)?;

        let scope = RecordScope {
            file_id: name.clone(),
            project_id: LOCAL_SCOPE.to_string(),
            tenant_id: LOCAL_SCOPE.to_string(),
        };
        let records: Vec<SegmentRecord> = document
            .segments
            .iter()
            .map(|segment| SegmentRecord::from_parsed(segment.segment_id.clone(), &scope, segment.clone()))
            .collect();

        let findings = self
            .engine
            .process_file(&records, &self.glossary_terms, &self.suppressed, &self.custom_rules)
            .await?;
        log::debug!("{name}: {} findings", findings.len());

        Ok(FileReport::checked(name, &document, findings))
    }
}
