//! Render backend trait for format-specific rendering.
//!
//! This trait abstracts the differences between the markdown and HTML output
//! formats, allowing the node walk to be generic over the output format.

use std::borrow::Cow;

use crate::styles::HtmlStyles;
use crate::table::Alignment;

/// Inline emphasis styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    Bold,
    Italic,
    BoldItalic,
    Strikethrough,
}

/// Backend trait for format-specific rendering operations.
///
/// Content passed to these functions is already resolved: nested nodes have
/// been rendered with the same backend. No escaping is performed on it.
pub trait RenderBackend {
    /// Render a heading. `index` is the section number or empty.
    fn header(level: u8, index: &str, content: &str, out: &mut String);

    /// Render plain text.
    fn text(content: &str, out: &mut String);

    /// Render emphasized text.
    fn emphasis(style: Emphasis, content: &str, out: &mut String);

    /// Render a block quote.
    fn block_quote(content: &str, out: &mut String);

    /// Render inline code.
    ///
    /// Both formats use an inline `<code>` tag.
    fn code(content: &str, out: &mut String) {
        out.push_str("<code>");
        out.push_str(content);
        out.push_str("</code>");
    }

    /// Render a code block tagged with a language identifier (may be empty).
    fn code_block(lang: &str, content: &str, out: &mut String);

    /// Render `count` line breaks.
    ///
    /// Both formats use `<br>` tags.
    fn line_break(count: usize, out: &mut String) {
        for _ in 0..count.max(1) {
            out.push_str("<br>\n");
        }
    }

    /// Render a bare newline.
    fn new_line(out: &mut String) {
        out.push('\n');
    }

    /// Render a horizontal separator.
    fn separator(out: &mut String);

    /// Render an image.
    fn image(url: &str, alt: &str, out: &mut String);

    /// Render a link.
    fn link(url: &str, title: &str, out: &mut String);

    /// Open a list at nesting `depth` (0 for the outermost list).
    fn list_start(ordered: bool, depth: usize, out: &mut String);

    /// Render one list item. `position` is 0-based within its own list.
    fn list_item(ordered: bool, depth: usize, position: usize, content: &str, out: &mut String);

    /// Close a list at nesting `depth`.
    fn list_end(ordered: bool, depth: usize, out: &mut String);

    /// Open a table.
    fn table_start(styles: Option<&HtmlStyles>, out: &mut String);

    /// Render the column alignment row that follows the header row.
    ///
    /// Default renders nothing; alignment is carried by cells instead.
    fn alignment_row(_aligns: &[Option<Alignment>], _out: &mut String) {}

    /// Open a table row.
    fn table_row_start(is_header: bool, out: &mut String);

    /// Render one table cell.
    fn table_cell(
        content: &str,
        align: Option<Alignment>,
        is_header: bool,
        styles: Option<&HtmlStyles>,
        out: &mut String,
    );

    /// Close a table row.
    fn table_row_end(is_header: bool, out: &mut String);

    /// Close a table.
    fn table_end(out: &mut String);

    /// Escape a plain-text table cell.
    ///
    /// Default returns the value unchanged.
    #[must_use]
    fn escape_cell(value: &str) -> Cow<'_, str> {
        Cow::Borrowed(value)
    }
}
