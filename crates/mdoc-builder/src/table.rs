//! Table builder and the table renderer.
//!
//! Tables are tolerant of malformed input: missing cells render empty, and
//! writes outside the grid are dropped with a warning.

use crate::backend::RenderBackend;
use crate::node::Content;
use crate::styles::HtmlStyles;

/// Markdown alignment indicator for columns without an explicit alignment.
pub const DEFAULT_ALIGN_INDICATOR: &str = ":---";

/// Column alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Middle,
    Right,
}

/// Fixed grid of cells with a header row and optional column alignment.
#[derive(Clone, Debug, Default)]
pub struct TableBuilder {
    headers: Vec<Option<Content>>,
    headers_align: Vec<Alignment>,
    body: Vec<Vec<Option<Content>>>,
}

impl TableBuilder {
    /// Create a table with `rows` empty body rows and `cols` columns.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            headers: vec![None; cols],
            headers_align: Vec::new(),
            body: vec![vec![None; cols]; rows],
        }
    }

    /// Set the header row.
    #[must_use]
    pub fn header<I, T>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Content>,
    {
        self.headers = headers.into_iter().map(|h| Some(h.into())).collect();
        self
    }

    /// Set per-column alignment. Columns past the end keep the default.
    #[must_use]
    pub fn headers_align(mut self, aligns: impl IntoIterator<Item = Alignment>) -> Self {
        self.headers_align = aligns.into_iter().collect();
        self
    }

    /// Append a body row.
    #[must_use]
    pub fn append_row<I, T>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Content>,
    {
        self.body.push(row.into_iter().map(|c| Some(c.into())).collect());
        self
    }

    /// Set the cell at `row`, `col`. Positions outside the grid are ignored.
    #[must_use]
    pub fn set_value(mut self, row: usize, col: usize, content: impl Into<Content>) -> Self {
        match self.body.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => *cell = Some(content.into()),
            None => {
                tracing::warn!(row, col, rows = self.body.len(), "Table cell out of range");
            }
        }
        self
    }

    /// Number of body rows.
    pub fn rows(&self) -> usize {
        self.body.len()
    }

    /// Number of columns (width of the header row).
    pub fn cols(&self) -> usize {
        self.headers.len()
    }

    /// Explicit alignment of column `col`, if any.
    pub fn alignment(&self, col: usize) -> Option<Alignment> {
        self.headers_align.get(col).copied()
    }
}

/// Render a table with backend `B`.
pub(crate) fn render_table<B: RenderBackend>(
    table: &TableBuilder,
    styles: Option<&HtmlStyles>,
    out: &mut String,
) {
    let cols = table.cols();
    if table.headers_align.len() > cols {
        tracing::warn!(
            aligns = table.headers_align.len(),
            cols,
            "Extra column alignments ignored"
        );
    }

    B::table_start(styles, out);

    render_row::<B>(table, &table.headers, true, styles, out);

    let aligns: Vec<Option<Alignment>> = (0..cols).map(|i| table.alignment(i)).collect();
    B::alignment_row(&aligns, out);

    for row in &table.body {
        render_row::<B>(table, row, false, styles, out);
    }

    B::table_end(out);
}

fn render_row<B: RenderBackend>(
    table: &TableBuilder,
    row: &[Option<Content>],
    is_header: bool,
    styles: Option<&HtmlStyles>,
    out: &mut String,
) {
    B::table_row_start(is_header, out);

    // Short rows are padded with empty cells; long rows render in full.
    for col in 0..row.len().max(table.cols()) {
        let content = match row.get(col) {
            Some(Some(Content::Node(node))) => node.render_to_string::<B>(styles),
            Some(Some(Content::Text(text))) => B::escape_cell(text).into_owned(),
            Some(None) | None => String::new(),
        };
        B::table_cell(&content, table.alignment(col), is_header, styles, out);
    }

    B::table_row_end(is_header, out);
}
