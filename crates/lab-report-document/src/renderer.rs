use crate::{Document, RenderError};
use std::path::{Path, PathBuf};

/// Turns a [`Document`] into the bytes of a file
///
/// Implementations must be shareable across threads: rendering usually runs
/// off the UI thread.
pub trait DocumentRenderer: Send + Sync {
    /// Render the document into file bytes
    fn render(&self, document: &Document) -> Result<Vec<u8>, RenderError>;
}

/// Render `document` and write it to `path`, creating parent directories.
///
/// Returns the path that was written.
pub fn write_document(
    renderer: &dyn DocumentRenderer,
    document: &Document,
    path: &Path,
) -> Result<PathBuf, RenderError> {
    let bytes = renderer.render(document)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| RenderError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, &bytes).map_err(|source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PlainText;

    impl DocumentRenderer for PlainText {
        fn render(&self, document: &Document) -> Result<Vec<u8>, RenderError> {
            Ok(document.title.clone().into_bytes())
        }
    }

    struct Failing;

    impl DocumentRenderer for Failing {
        fn render(&self, _document: &Document) -> Result<Vec<u8>, RenderError> {
            Err(RenderError::Backend("boom".into()))
        }
    }

    #[test]
    fn test_write_document_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/report.txt");

        let written = write_document(&PlainText, &Document::new("hello"), &path).unwrap();

        assert_eq!(written, path);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_render_errors_propagate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");

        let err = write_document(&Failing, &Document::new("x"), &path).unwrap_err();

        assert!(matches!(err, RenderError::Backend(_)));
        assert!(!path.exists());
    }
}
