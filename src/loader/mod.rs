//! Document loading boundary.
//!
//! A [`DocumentLoader`] turns a file path into an ordered list of
//! non-empty, trimmed, encoding-normalized lines. The loader for a path is
//! selected once here at the boundary, never inside the comparison core.
//! This crate ships the plain-text loader; binary container formats
//! (word-processor, PDF) are external collaborators and their extensions
//! are rejected with `UnsupportedFormat`.

use crate::error::{DocDiffError, Result};
use std::path::Path;

/// Capability to extract comparison lines from a document file.
pub trait DocumentLoader: std::fmt::Debug {
    /// Load the document as trimmed, non-empty lines.
    fn load_lines(&self, path: &Path) -> Result<Vec<String>>;
}

/// Loader for plain-text documents.
///
/// Reads the file as UTF-8 with lossy decoding for invalid byte runs,
/// tolerates a leading BOM, trims every line, and drops blank lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextLoader;

impl DocumentLoader for PlainTextLoader {
    fn load_lines(&self, path: &Path) -> Result<Vec<String>> {
        let bytes = std::fs::read(path).map_err(|e| DocDiffError::io(path, e))?;
        let text = String::from_utf8_lossy(&bytes);
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

        let lines: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        if lines.is_empty() {
            tracing::warn!(path = %path.display(), "document has no non-blank lines");
        }
        Ok(lines)
    }
}

/// Extensions handled by the plain-text loader. An absent extension is
/// treated as plain text as well.
const PLAIN_TEXT_EXTENSIONS: &[&str] = &["txt", "text", "md", "log", "csv"];

/// Select the loader for a path, once, at the boundary.
///
/// # Errors
///
/// `UnsupportedFormat` for extensions this crate has no loader for.
pub fn loader_for(path: &Path) -> Result<Box<dyn DocumentLoader>> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase());

    match extension.as_deref() {
        None => Ok(Box::new(PlainTextLoader)),
        Some(ext) if PLAIN_TEXT_EXTENSIONS.contains(&ext) => Ok(Box::new(PlainTextLoader)),
        Some(ext) => Err(DocDiffError::unsupported_format(
            path.display().to_string(),
            ext,
        )),
    }
}

/// Load a document's lines, selecting the loader by path.
pub fn load_document(path: &Path) -> Result<Vec<String>> {
    loader_for(path)?.load_lines(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, content: &[u8]) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).expect("create temp file");
        file.write_all(content).expect("write temp file");
        (dir, path)
    }

    #[test]
    fn test_load_trims_and_drops_blank_lines() {
        let (_dir, path) = write_temp("doc.txt", b"  first  \n\n\t\nsecond\n");
        let lines = load_document(&path).unwrap();
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn test_load_strips_bom() {
        let (_dir, path) = write_temp("doc.txt", b"\xef\xbb\xbfhello\n");
        let lines = load_document(&path).unwrap();
        assert_eq!(lines, vec!["hello"]);
    }

    #[test]
    fn test_load_lossy_decodes_invalid_utf8() {
        let (_dir, path) = write_temp("doc.txt", b"ok \xff\xfe line\n");
        let lines = load_document(&path).unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("ok"));
    }

    #[test]
    fn test_load_empty_file() {
        let (_dir, path) = write_temp("doc.txt", b"");
        assert!(load_document(&path).unwrap().is_empty());
    }

    #[test]
    fn test_extensionless_path_is_plain_text() {
        let (_dir, path) = write_temp("README", b"content\n");
        assert_eq!(load_document(&path).unwrap(), vec!["content"]);
    }

    #[test]
    fn test_unsupported_extension_rejected() {
        let err = loader_for(Path::new("report.docx")).unwrap_err();
        assert!(err.to_string().contains("load"), "got: {err}");

        assert!(loader_for(Path::new("scan.pdf")).is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = PlainTextLoader
            .load_lines(Path::new("/nonexistent/file.txt"))
            .unwrap_err();
        assert!(matches!(err, DocDiffError::Io { .. }));
    }
}
