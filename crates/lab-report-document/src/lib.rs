//! Printable report documents.
//!
//! A [`Document`] is a renderer-agnostic description of a report: a title
//! followed by blocks (labelled fields, tables, headed sections). Renderers
//! implement [`DocumentRenderer`] and turn a document into file bytes; the
//! bundled [`PdfRenderer`] produces a paginated A4 PDF.
//!
//! ```ignore
//! use lab_report_document::{write_document, Document, PdfRenderer};
//!
//! let document = Document::new("Report");
//! write_document(&PdfRenderer::default(), &document, "report.pdf".as_ref())?;
//! ```

mod document;
mod error;
mod pdf;
mod renderer;
mod wrap;

pub use document::{Block, Cell, Document, Field, Table};
pub use error::RenderError;
pub use pdf::PdfRenderer;
pub use renderer::{write_document, DocumentRenderer};
