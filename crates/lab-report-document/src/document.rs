/// A renderer-agnostic printable document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    /// Append a block, builder style
    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// All tables of the document, in order
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table(table) => Some(table),
            _ => None,
        })
    }
}

/// Content blocks, rendered top to bottom
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Bold label followed by its value, one per line
    Fields(Vec<Field>),
    /// Bordered table with a header row
    Table(Table),
    /// Underlined heading followed by free text
    Section { heading: String, body: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub label: String,
    pub value: String,
}

impl Field {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A table; `widths` are relative column weights
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub widths: Vec<f32>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(headers: &[(&str, f32)]) -> Self {
        Self {
            headers: headers.iter().map(|(h, _)| h.to_string()).collect(),
            widths: headers.iter().map(|(_, w)| *w).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }
}

/// A table cell holding one or more lines of text
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    pub lines: Vec<String>,
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
        }
    }

    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines joined with the given separator
    pub fn joined(&self, separator: &str) -> String {
        self.lines.join(separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_iterates_only_tables() {
        let mut table = Table::new(&[("A", 1.0), ("B", 2.0)]);
        table.push_row(vec![Cell::text("1"), Cell::lines(["x", "y"])]);

        let document = Document::new("Doc")
            .with_block(Block::Fields(vec![Field::new("K", "V")]))
            .with_block(Block::Table(table))
            .with_block(Block::Section {
                heading: "H".into(),
                body: "B".into(),
            });

        let tables: Vec<_> = document.tables().collect();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].widths, vec![1.0, 2.0]);
        assert_eq!(tables[0].rows[0][1].joined("|"), "x|y");
    }
}
