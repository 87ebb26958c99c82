//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use xliffqa_core::FileType;

/// Reads bilingual documents from disk
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }

    /// File type implied by the extension
    pub fn declared_file_type(path: &Path) -> Result<FileType> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
            .ok_or_else(|| CliError::UnsupportedFileType(path.display().to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("strings.xlf");

        let content = "<xliff version=\"1.2\"><file/></xliff>";
        fs::write(&file_path, content).unwrap();

        assert_eq!(FileReader::read_text(&file_path).unwrap(), content);
    }

    #[test]
    fn test_read_text_missing_file() {
        let err = FileReader::read_text(Path::new("/nonexistent/strings.xlf")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_read_text_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("binary.xlf");
        fs::write(&file_path, [0xff, 0xfe, 0x00, 0x3c]).unwrap();

        let err = FileReader::read_text(&file_path).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_file_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("sized.xlf");
        fs::write(&file_path, "a".repeat(1024)).unwrap();

        assert_eq!(FileReader::file_size(&file_path).unwrap(), 1024);
        assert!(FileReader::file_size(Path::new("/nonexistent/a.xlf")).is_err());
    }

    #[test]
    fn test_declared_file_type() {
        assert_eq!(
            FileReader::declared_file_type(Path::new("a/strings.xlf")).unwrap(),
            FileType::Xliff
        );
        assert_eq!(
            FileReader::declared_file_type(Path::new("STRINGS.XLIFF")).unwrap(),
            FileType::Xliff
        );
        assert_eq!(
            FileReader::declared_file_type(Path::new("job.sdlxliff")).unwrap(),
            FileType::Sdlxliff
        );

        let err = FileReader::declared_file_type(Path::new("notes.txt")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::UnsupportedFileType(_))
        ));
        assert!(FileReader::declared_file_type(Path::new("README")).is_err());
    }
}
