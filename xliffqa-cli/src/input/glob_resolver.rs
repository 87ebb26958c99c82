//! Input pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};
use xliffqa_core::FileType;

/// Whether the extension names a format the parser reads
pub fn is_bilingual_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.parse::<FileType>().is_ok())
}

/// Resolve input patterns to file paths
///
/// A directory expands to the bilingual files directly inside it. Explicit
/// file paths are kept whatever their extension so the caller can report
/// them.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_dir() {
            let entries = std::fs::read_dir(path)
                .with_context(|| format!("Failed to read directory: {pattern}"))?;
            for entry in entries {
                let entry = entry.with_context(|| format!("Failed to read directory: {pattern}"))?;
                let candidate = entry.path();
                if candidate.is_file() && is_bilingual_file(&candidate) {
                    files.push(candidate);
                }
            }
            continue;
        }

        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;
        for path_result in paths {
            let path = path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::InvalidPattern(patterns.join(", ")).into());
    }

    files.sort();
    files.dedup();

    Ok(files)
}
