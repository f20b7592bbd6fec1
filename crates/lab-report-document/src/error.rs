use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while rendering or writing a document
#[derive(Debug, Error)]
pub enum RenderError {
    /// The rendering backend rejected the document
    #[error("failed to render document: {0}")]
    Backend(String),

    /// The rendered bytes could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
