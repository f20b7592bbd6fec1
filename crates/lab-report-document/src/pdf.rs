//! PDF backend built on `printpdf` builtin fonts.
//!
//! Layout is a single flowing column: the cursor moves down the page and a
//! new page is started whenever the next element does not fit. Table header
//! rows are repeated at the top of every continuation page.
//!
//! The builtin fonts use WinAnsiEncoding. Characters outside it are written
//! as [`UNENCODABLE`] and counted, never dropped.

use crate::wrap::wrap;
use crate::{Block, Cell, Document, DocumentRenderer, Field, RenderError, Table};
use printpdf::{
    lopdf, BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};
use std::borrow::Cow;

/// Millimetres per PostScript point
const MM_PER_PT: f32 = 0.3528;
/// Average Helvetica glyph width relative to the font size
const AVG_GLYPH_WIDTH: f32 = 0.5;
const LINE_SPACING: f32 = 1.3;
const CELL_PADDING: f32 = 2.0;
const BLOCK_SPACING: f32 = 6.0;

/// Navy used for the title and section rules
const ACCENT: (f32, f32, f32) = (26.0 / 255.0, 42.0 / 255.0, 108.0 / 255.0);
const BORDER: (f32, f32, f32) = (0.8667, 0.8667, 0.8667);

/// Written in place of characters the builtin fonts cannot encode
pub const UNENCODABLE: char = '?';

/// Renders documents to A4 PDFs
#[derive(Debug, Clone)]
pub struct PdfRenderer {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub title_size: f32,
    pub heading_size: f32,
    pub body_size: f32,
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin: 15.0,
            title_size: 18.0,
            heading_size: 14.0,
            body_size: 10.0,
        }
    }
}

impl DocumentRenderer for PdfRenderer {
    fn render(&self, document: &Document) -> Result<Vec<u8>, RenderError> {
        let (doc, page, layer) = PdfDocument::new(
            &document.title,
            Mm(self.page_width),
            Mm(self.page_height),
            "content",
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(backend_error)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(backend_error)?;

        {
            let mut canvas = Canvas {
                doc: &doc,
                layer: doc.get_page(page).get_layer(layer),
                regular,
                bold,
                style: self,
                y: self.page_height - self.margin,
                pages: 1,
                replaced: 0,
            };

            canvas.title(&document.title);
            for block in &document.blocks {
                match block {
                    Block::Fields(fields) => canvas.fields(fields),
                    Block::Table(table) => canvas.table(table),
                    Block::Section { heading, body } => canvas.section(heading, body),
                }
                canvas.y -= BLOCK_SPACING;
            }
            log::debug!(
                "Rendered '{}' on {} page(s)",
                document.title,
                canvas.pages
            );
            if canvas.replaced > 0 {
                log::warn!(
                    "'{}': {} character(s) not supported by the PDF font, written as '{}'",
                    document.title,
                    canvas.replaced,
                    UNENCODABLE
                );
            }
        }

        doc.save_to_bytes().map_err(backend_error)
    }
}

fn backend_error(err: printpdf::Error) -> RenderError {
    RenderError::Backend(err.to_string())
}

fn rgb((r, g, b): (f32, f32, f32)) -> Color {
    Color::Rgb(Rgb::new(r, g, b, None))
}

fn line_height(size: f32) -> f32 {
    size * MM_PER_PT * LINE_SPACING
}

fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * MM_PER_PT * AVG_GLYPH_WIDTH
}

/// Text as the builtin fonts can show it, plus how many characters were replaced
fn win_ansi(text: &str) -> (Cow<'_, str>, usize) {
    if text.chars().all(is_win_ansi) {
        return (Cow::Borrowed(text), 0);
    }
    let mut replaced = 0;
    let encoded = text
        .chars()
        .map(|c| {
            if is_win_ansi(c) {
                c
            } else {
                replaced += 1;
                UNENCODABLE
            }
        })
        .collect();
    (Cow::Owned(encoded), replaced)
}

fn is_win_ansi(c: char) -> bool {
    if c == ' ' || c.is_ascii_graphic() {
        return true;
    }
    let mut buf = [0u8; 4];
    lopdf::Document::encode_text(Some("WinAnsiEncoding"), c.encode_utf8(&mut buf)).len() == 1
}

/// How many characters fit into `width` millimetres
fn capacity(width: f32, size: f32) -> usize {
    (width / (size * MM_PER_PT * AVG_GLYPH_WIDTH)).floor().max(1.0) as usize
}

struct Canvas<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    style: &'a PdfRenderer,
    /// Current top of the free area, in mm from the page bottom
    y: f32,
    pages: usize,
    /// Characters written as `UNENCODABLE`
    replaced: usize,
}

impl Canvas<'_> {
    fn content_width(&self) -> f32 {
        self.style.page_width - 2.0 * self.style.margin
    }

    /// Start a new page if `height` does not fit; returns true when it did
    fn ensure_space(&mut self, height: f32) -> bool {
        if self.y - height >= self.style.margin {
            return false;
        }
        let (page, layer) = self.doc.add_page(
            Mm(self.style.page_width),
            Mm(self.style.page_height),
            "content",
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = self.style.page_height - self.style.margin;
        self.pages += 1;
        true
    }

    fn write(&mut self, text: &str, size: f32, x: f32, baseline: f32, bold: bool) {
        let (text, replaced) = win_ansi(text);
        self.replaced += replaced;
        let font = if bold { &self.bold } else { &self.regular };
        self.layer.use_text(text, size, Mm(x), Mm(baseline), font);
    }

    fn stroke(&self, from: (f32, f32), to: (f32, f32)) {
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(from.0), Mm(from.1)), false),
                (Point::new(Mm(to.0), Mm(to.1)), false),
            ],
            is_closed: false,
        });
    }

    fn stroke_rect(&self, x: f32, top: f32, width: f32, height: f32) {
        let bottom = top - height;
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(x), Mm(top)), false),
                (Point::new(Mm(x + width), Mm(top)), false),
                (Point::new(Mm(x + width), Mm(bottom)), false),
                (Point::new(Mm(x), Mm(bottom)), false),
            ],
            is_closed: true,
        });
    }

    fn title(&mut self, title: &str) {
        let size = self.style.title_size;
        let height = line_height(size);
        self.ensure_space(height);

        let x = ((self.style.page_width - text_width(title, size)) / 2.0).max(self.style.margin);
        self.layer.set_fill_color(rgb(ACCENT));
        self.write(title, size, x, self.y - size * MM_PER_PT, true);
        self.layer.set_fill_color(rgb((0.0, 0.0, 0.0)));
        self.y -= height + BLOCK_SPACING;
    }

    fn fields(&mut self, fields: &[Field]) {
        let size = self.style.body_size;
        let lh = line_height(size);

        for field in fields {
            let label = format!("{}:", field.label);
            let indent = text_width(&label, size) + 2.0;
            let lines = wrap(&field.value, capacity(self.content_width() - indent, size));

            for (i, line) in lines.iter().enumerate() {
                self.ensure_space(lh);
                let baseline = self.y - size * MM_PER_PT;
                if i == 0 {
                    self.write(&label, size, self.style.margin, baseline, true);
                }
                self.write(line, size, self.style.margin + indent, baseline, false);
                self.y -= lh;
            }
        }
    }

    fn column_widths(&self, table: &Table) -> Vec<f32> {
        let total: f32 = table.widths.iter().sum();
        let total = if total > 0.0 { total } else { 1.0 };
        table
            .widths
            .iter()
            .map(|w| self.content_width() * w / total)
            .collect()
    }

    fn table(&mut self, table: &Table) {
        let widths = self.column_widths(table);
        let header: Vec<Cell> = table.headers.iter().map(Cell::text).collect();

        self.ensure_space(self.row_height(&header, &widths));
        self.row(&header, &widths, true);

        for cells in &table.rows {
            let height = self.row_height(cells, &widths);
            if self.ensure_space(height) {
                self.row(&header, &widths, true);
            }
            self.row(cells, &widths, false);
        }
    }

    fn wrapped_cell(&self, cell: &Cell, width: f32) -> Vec<String> {
        let chars = capacity(width - 2.0 * CELL_PADDING, self.style.body_size);
        let lines: Vec<String> = cell.lines.iter().flat_map(|l| wrap(l, chars)).collect();
        if lines.is_empty() {
            vec![String::new()]
        } else {
            lines
        }
    }

    fn row_height(&self, cells: &[Cell], widths: &[f32]) -> f32 {
        let max_lines = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| self.wrapped_cell(cell, *width).len())
            .max()
            .unwrap_or(1);
        max_lines as f32 * line_height(self.style.body_size) + 2.0 * CELL_PADDING
    }

    fn row(&mut self, cells: &[Cell], widths: &[f32], bold: bool) {
        let size = self.style.body_size;
        let height = self.row_height(cells, widths);
        let mut x = self.style.margin;

        self.layer.set_outline_color(rgb(BORDER));
        self.layer.set_outline_thickness(0.5);

        for (cell, width) in cells.iter().zip(widths) {
            self.stroke_rect(x, self.y, *width, height);
            let mut baseline = self.y - CELL_PADDING - size * MM_PER_PT;
            for line in self.wrapped_cell(cell, *width) {
                self.write(&line, size, x + CELL_PADDING, baseline, bold);
                baseline -= line_height(size);
            }
            x += width;
        }

        self.y -= height;
    }

    fn section(&mut self, heading: &str, body: &str) {
        let size = self.style.heading_size;
        let lh = line_height(size);
        self.ensure_space(lh + 4.0);

        self.write(heading, size, self.style.margin, self.y - size * MM_PER_PT, true);
        self.y -= lh + 1.0;

        self.layer.set_outline_color(rgb(ACCENT));
        self.layer.set_outline_thickness(1.5);
        self.stroke(
            (self.style.margin, self.y),
            (self.style.page_width - self.style.margin, self.y),
        );
        self.y -= 4.0;

        let body_size = self.style.body_size;
        let body_lh = line_height(body_size);
        for line in wrap(body, capacity(self.content_width(), body_size)) {
            self.ensure_space(body_lh);
            self.write(&line, body_size, self.style.margin, self.y - body_size * MM_PER_PT, false);
            self.y -= body_lh;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document(rows: usize) -> Document {
        let mut table = Table::new(&[("PC", 1.0), ("Estado", 2.5), ("Tareas", 6.5)]);
        for i in 1..=rows {
            table.push_row(vec![
                Cell::text(i.to_string()),
                Cell::text("Mantenimiento"),
                Cell::lines(["cambio de pasta térmica", "limpieza"]),
            ]);
        }
        Document::new("Informe LAB46 - Detalle Completo")
            .with_block(Block::Fields(vec![
                Field::new("Auxiliar", "Nombre del Auxiliar"),
                Field::new("Turno", "Mañana"),
            ]))
            .with_block(Block::Table(table))
            .with_block(Block::Section {
                heading: "Conclusiones".into(),
                body: "Sin novedades.".into(),
            })
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let bytes = PdfRenderer::default().render(&sample_document(3)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_long_tables_span_pages() {
        let short = PdfRenderer::default().render(&sample_document(2)).unwrap();
        let long = PdfRenderer::default().render(&sample_document(120)).unwrap();
        assert!(long.len() > short.len());
    }

    #[test]
    fn test_unsupported_characters_are_marked() {
        let (text, replaced) = win_ansi("✔ listo 😀 Ω 中文");
        assert_eq!(text, "? listo ? ? ??");
        assert_eq!(replaced, 5);

        let (text, replaced) = win_ansi("€ señal, pasta térmica");
        assert!(matches!(text, Cow::Borrowed(_)));
        assert_eq!(replaced, 0);
    }

    #[test]
    fn test_render_with_unsupported_characters() {
        let mut table = Table::new(&[("PC", 1.0), ("Tareas", 9.0)]);
        table.push_row(vec![
            Cell::text("1"),
            Cell::lines(["✔ listo 😀 Ω 中文", "€ señal"]),
        ]);
        let document = Document::new("Informe").with_block(Block::Table(table));

        let bytes = PdfRenderer::default().render(&document).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_capacity_never_zero() {
        assert_eq!(capacity(0.0, 10.0), 1);
        assert!(capacity(180.0, 10.0) > 60);
    }
}
