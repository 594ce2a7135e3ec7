#![forbid(unsafe_code)]

//! Documents handed to the scanner and their scan results

use crate::engine::report::MatchReport;
use std::fs;
use std::path::{Path, PathBuf};

/// Display name for documents without a path
pub const STDIN_PATH: &str = "stdin";

/// A text document to scan
///
/// `base` is the directory the relative path is computed from. A document
/// without contents produces a successful empty report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    path: Option<PathBuf>,
    base: Option<PathBuf>,
    contents: Option<String>,
}

impl Document {
    /// Creates a document with a path and contents
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Document {
            path: Some(path.into()),
            base: None,
            contents: Some(contents.into()),
        }
    }

    /// Creates a pathless document, reported as `stdin`
    pub fn stdin(contents: impl Into<String>) -> Self {
        Document {
            contents: Some(contents.into()),
            ..Default::default()
        }
    }

    /// Creates a document that has a path but no contents
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Document {
            path: Some(path.into()),
            ..Default::default()
        }
    }

    /// Reads a document from disk
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected.
    pub fn read(path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let path = path.into();
        let bytes = fs::read(&path)?;
        let contents = String::from_utf8_lossy(&bytes).into_owned();
        Ok(Document::new(path, contents))
    }

    /// Sets the base directory for `relative_path`
    pub fn with_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Path as given, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Raw text content, if any
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Path used in reports, falling back to `stdin`
    pub fn display_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(STDIN_PATH))
    }

    /// Path relative to the base directory
    ///
    /// Falls back to `display_path` when there is no base or the path is
    /// outside it.
    pub fn relative_path(&self) -> PathBuf {
        match (&self.path, &self.base) {
            (Some(path), Some(base)) => path
                .strip_prefix(base)
                .map(Path::to_path_buf)
                .unwrap_or_else(|_| path.clone()),
            _ => self.display_path(),
        }
    }
}

/// A document together with its match report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintedDocument {
    pub document: Document,
    pub report: MatchReport,
}

impl LintedDocument {
    /// True if the document's report is successful
    pub fn passed(&self) -> bool {
        self.report.success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_display_path_falls_back_to_stdin() {
        let doc = Document::stdin("text");
        assert_eq!(doc.display_path(), PathBuf::from("stdin"));
        assert_eq!(doc.relative_path(), PathBuf::from("stdin"));
    }

    #[test]
    fn test_relative_path_strips_base() {
        let doc = Document::new("test/fixtures/a.js", "").with_base("test/fixtures");
        assert_eq!(doc.relative_path(), PathBuf::from("a.js"));
        assert_eq!(doc.display_path(), PathBuf::from("test/fixtures/a.js"));
    }

    #[test]
    fn test_relative_path_outside_base() {
        let doc = Document::new("other/a.js", "").with_base("test");
        assert_eq!(doc.relative_path(), PathBuf::from("other/a.js"));
    }

    #[test]
    fn test_empty_document_has_no_contents() {
        let doc = Document::empty("a.js");
        assert!(doc.contents().is_none());
        assert_eq!(doc.path(), Some(Path::new("a.js")));
    }

    #[test]
    fn test_read_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.js");
        fs::write(&path, "console.log(1);\n").unwrap();

        let doc = Document::read(&path).unwrap();
        assert_eq!(doc.contents(), Some("console.log(1);\n"));
        assert_eq!(doc.path(), Some(path.as_path()));
    }

    #[test]
    fn test_read_lossy_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bin.dat");
        fs::write(&path, [b'o', b'k', 0xff]).unwrap();

        let doc = Document::read(&path).unwrap();
        assert!(doc.contents().unwrap().starts_with("ok"));
    }

    #[test]
    fn test_read_missing_file() {
        assert!(Document::read("/definitely/not/here.js").is_err());
    }
}
