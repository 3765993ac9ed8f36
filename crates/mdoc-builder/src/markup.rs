//! Markdown backend.
//!
//! Produces the lightweight markup dialect (`**bold**`, `# heading`, pipe tables).

use std::borrow::Cow;
use std::fmt::Write;

use crate::backend::{Emphasis, RenderBackend};
use crate::styles::HtmlStyles;
use crate::table::{Alignment, DEFAULT_ALIGN_INDICATOR};

/// Markdown render backend.
pub struct MarkdownBackend;

impl RenderBackend for MarkdownBackend {
    fn header(level: u8, index: &str, content: &str, out: &mut String) {
        for _ in 0..level {
            out.push('#');
        }
        writeln!(out, " {index}{content}").unwrap();
    }

    fn text(content: &str, out: &mut String) {
        out.push_str(content);
    }

    fn emphasis(style: Emphasis, content: &str, out: &mut String) {
        let marker = match style {
            Emphasis::Bold => "**",
            Emphasis::Italic => "*",
            Emphasis::BoldItalic => "***",
            Emphasis::Strikethrough => "~~",
        };
        write!(out, "{marker}{content}{marker}").unwrap();
    }

    fn block_quote(content: &str, out: &mut String) {
        // Only the first newline is escaped; later ones pass through as-is.
        let content = content.replacen('\n', "\\n", 1);
        writeln!(out, "> {content}\n").unwrap();
    }

    fn code_block(lang: &str, content: &str, out: &mut String) {
        writeln!(out, "\n```{lang}\n{content}\n```").unwrap();
    }

    fn separator(out: &mut String) {
        out.push_str("---\n");
    }

    fn image(url: &str, alt: &str, out: &mut String) {
        writeln!(out, "![{alt}]({url})").unwrap();
    }

    fn link(url: &str, title: &str, out: &mut String) {
        write!(out, "[{title}]({url})").unwrap();
    }

    fn list_start(_ordered: bool, depth: usize, out: &mut String) {
        if depth == 0 {
            out.push('\n');
        }
    }

    fn list_item(ordered: bool, depth: usize, position: usize, content: &str, out: &mut String) {
        for _ in 0..depth {
            out.push('\t');
        }
        if ordered {
            writeln!(out, "{}. {content}", position + 1).unwrap();
        } else {
            writeln!(out, "- {content}").unwrap();
        }
    }

    fn list_end(_ordered: bool, depth: usize, out: &mut String) {
        if depth == 0 {
            out.push('\n');
        }
    }

    fn table_start(_styles: Option<&HtmlStyles>, _out: &mut String) {}

    fn alignment_row(aligns: &[Option<Alignment>], out: &mut String) {
        out.push('|');
        for align in aligns {
            let indicator = match align {
                Some(Alignment::Left) | None => DEFAULT_ALIGN_INDICATOR,
                Some(Alignment::Middle) => ":---:",
                Some(Alignment::Right) => "---:",
            };
            write!(out, " {indicator} |").unwrap();
        }
        out.push('\n');
    }

    fn table_row_start(_is_header: bool, out: &mut String) {
        out.push('|');
    }

    fn table_cell(
        content: &str,
        _align: Option<Alignment>,
        _is_header: bool,
        _styles: Option<&HtmlStyles>,
        out: &mut String,
    ) {
        write!(out, " {content} |").unwrap();
    }

    fn table_row_end(_is_header: bool, out: &mut String) {
        out.push('\n');
    }

    fn table_end(_out: &mut String) {}

    fn escape_cell(value: &str) -> Cow<'_, str> {
        if value.contains('\n') {
            Cow::Owned(value.replace('\n', "\\n"))
        } else {
            Cow::Borrowed(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_without_index() {
        let mut out = String::new();
        MarkdownBackend::header(3, "", "Title", &mut out);
        assert_eq!(out, "### Title\n");
    }

    #[test]
    fn test_header_with_index() {
        let mut out = String::new();
        MarkdownBackend::header(2, "1.2. ", "Title", &mut out);
        assert_eq!(out, "## 1.2. Title\n");
    }

    #[test]
    fn test_emphasis_markers() {
        let render = |style| {
            let mut out = String::new();
            MarkdownBackend::emphasis(style, "x", &mut out);
            out
        };
        assert_eq!(render(Emphasis::Bold), "**x**");
        assert_eq!(render(Emphasis::Italic), "*x*");
        assert_eq!(render(Emphasis::BoldItalic), "***x***");
        assert_eq!(render(Emphasis::Strikethrough), "~~x~~");
    }

    #[test]
    fn test_block_quote_escapes_only_first_newline() {
        let mut out = String::new();
        MarkdownBackend::block_quote("a\nb\nc", &mut out);
        assert_eq!(out, "> a\\nb\nc\n\n");
    }

    #[test]
    fn test_code_block() {
        let mut out = String::new();
        MarkdownBackend::code_block("json", "{}", &mut out);
        assert_eq!(out, "\n```json\n{}\n```\n");
    }

    #[test]
    fn test_line_break_shared_with_html() {
        let mut out = String::new();
        MarkdownBackend::line_break(2, &mut out);
        assert_eq!(out, "<br>\n<br>\n");
    }

    #[test]
    fn test_list_items() {
        let mut out = String::new();
        MarkdownBackend::list_item(true, 0, 1, "b", &mut out);
        MarkdownBackend::list_item(false, 2, 0, "x", &mut out);
        assert_eq!(out, "2. b\n\t\t- x\n");
    }

    #[test]
    fn test_alignment_row() {
        let mut out = String::new();
        MarkdownBackend::alignment_row(
            &[Some(Alignment::Middle), Some(Alignment::Right), None],
            &mut out,
        );
        assert_eq!(out, "| :---: | ---: | :--- |\n");
    }

    #[test]
    fn test_escape_cell_replaces_every_newline() {
        assert_eq!(MarkdownBackend::escape_cell("a\nb\nc"), "a\\nb\\nc");
        assert!(matches!(
            MarkdownBackend::escape_cell("plain"),
            Cow::Borrowed("plain")
        ));
    }
}
