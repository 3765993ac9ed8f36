//! HTML backend for document rendering.
//!
//! Produces an HTML fragment. Table cells pick up inline styles from
//! [`HtmlStyles`]; every other element renders as a bare tag.

use std::fmt::Write;

use crate::backend::{Emphasis, RenderBackend};
use crate::styles::HtmlStyles;
use crate::table::Alignment;

/// `type` attribute of ordered lists, cycling with nesting depth.
const ORDERED_LIST_TYPES: [&str; 3] = ["1", "a", "i"];

/// HTML render backend.
///
/// Produces:
/// - `<hN>` for headers
/// - `<span>`, `<strong>`, `<em>`, `<s>` for inline text
/// - `<ol type>` / `<ul>` for lists
/// - `<table>` with per-cell `text-align` styles
pub struct HtmlBackend;

impl HtmlBackend {
    /// Inline `text-align` declaration for a column alignment.
    pub fn alignment_style(align: Option<Alignment>) -> &'static str {
        match align {
            Some(Alignment::Middle) => "text-align: center;",
            Some(Alignment::Left) => "text-align: left;",
            Some(Alignment::Right) => "text-align: right;",
            None => "text-align: inherit;",
        }
    }
}

impl RenderBackend for HtmlBackend {
    fn header(level: u8, index: &str, content: &str, out: &mut String) {
        writeln!(out, "<h{level}>{index}{content}</h{level}>").unwrap();
    }

    fn text(content: &str, out: &mut String) {
        writeln!(out, "<span>{content}</span>").unwrap();
    }

    fn emphasis(style: Emphasis, content: &str, out: &mut String) {
        match style {
            Emphasis::Bold => write!(out, "<strong>{content}</strong>"),
            Emphasis::Italic => write!(out, "<em>{content}</em>"),
            Emphasis::BoldItalic => write!(out, "<strong><em>{content}</em></strong>"),
            Emphasis::Strikethrough => write!(out, "<s>{content}</s>"),
        }
        .unwrap();
    }

    fn block_quote(content: &str, out: &mut String) {
        writeln!(out, "\n<blockquote>{content}</blockquote>").unwrap();
    }

    fn code_block(_lang: &str, content: &str, out: &mut String) {
        writeln!(out, "\n<code>\n{content}\n</code>").unwrap();
    }

    fn separator(out: &mut String) {
        out.push_str("<hr />\n");
    }

    fn image(url: &str, alt: &str, out: &mut String) {
        writeln!(out, r#"<img src="{url}" alt="{alt}"/>"#).unwrap();
    }

    fn link(url: &str, title: &str, out: &mut String) {
        write!(out, r#"<a href="{url}" target="_blank">{title}</a>"#).unwrap();
    }

    fn list_start(ordered: bool, depth: usize, out: &mut String) {
        if depth == 0 {
            out.push('\n');
        }
        push_indent(depth, out);
        if ordered {
            let kind = ORDERED_LIST_TYPES[depth % ORDERED_LIST_TYPES.len()];
            writeln!(out, r#"<ol type="{kind}">"#).unwrap();
        } else {
            out.push_str("<ul>\n");
        }
    }

    fn list_item(
        _ordered: bool,
        depth: usize,
        _position: usize,
        content: &str,
        out: &mut String,
    ) {
        push_indent(depth + 1, out);
        writeln!(out, "<li>{content}</li>").unwrap();
    }

    fn list_end(ordered: bool, depth: usize, out: &mut String) {
        push_indent(depth, out);
        out.push_str(if ordered { "</ol>\n" } else { "</ul>\n" });
    }

    fn table_start(styles: Option<&HtmlStyles>, out: &mut String) {
        match styles.and_then(HtmlStyles::table_style_content) {
            Some(style) => writeln!(out, r#"<table style="{style}">"#).unwrap(),
            None => out.push_str("<table>\n"),
        }
    }

    fn table_row_start(_is_header: bool, out: &mut String) {
        out.push_str("\n  <tr>\n");
    }

    fn table_cell(
        content: &str,
        align: Option<Alignment>,
        is_header: bool,
        styles: Option<&HtmlStyles>,
        out: &mut String,
    ) {
        let align_style = Self::alignment_style(align);
        let cell_style = styles.and_then(|s| {
            if is_header {
                s.th_style_content()
            } else {
                s.td_style_content()
            }
        });
        let style = match cell_style {
            Some(prefix) => format!("{prefix} {align_style}"),
            None => align_style.to_owned(),
        };

        if is_header {
            writeln!(out, r#"    <th style="{style}"><strong>{content}</strong></th>"#).unwrap();
        } else {
            writeln!(out, r#"    <td style="{style}">{content}</td>"#).unwrap();
        }
    }

    fn table_row_end(_is_header: bool, out: &mut String) {
        out.push_str("  </tr>\n");
    }

    fn table_end(out: &mut String) {
        out.push_str("\n</table>");
    }
}

fn push_indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header() {
        let mut out = String::new();
        HtmlBackend::header(2, "1.1. ", "Usage", &mut out);
        assert_eq!(out, "<h2>1.1. Usage</h2>\n");
    }

    #[test]
    fn test_text_is_not_escaped() {
        let mut out = String::new();
        HtmlBackend::text("<b>raw</b>", &mut out);
        assert_eq!(out, "<span><b>raw</b></span>\n");
    }

    #[test]
    fn test_emphasis_tags() {
        let render = |style| {
            let mut out = String::new();
            HtmlBackend::emphasis(style, "x", &mut out);
            out
        };
        assert_eq!(render(Emphasis::Bold), "<strong>x</strong>");
        assert_eq!(render(Emphasis::Italic), "<em>x</em>");
        assert_eq!(render(Emphasis::BoldItalic), "<strong><em>x</em></strong>");
        assert_eq!(render(Emphasis::Strikethrough), "<s>x</s>");
    }

    #[test]
    fn test_block_quote() {
        let mut out = String::new();
        HtmlBackend::block_quote("a\nb", &mut out);
        assert_eq!(out, "\n<blockquote>a\nb</blockquote>\n");
    }

    #[test]
    fn test_code_block_ignores_language() {
        let mut out = String::new();
        HtmlBackend::code_block("rust", "fn main() {}", &mut out);
        assert_eq!(out, "\n<code>\nfn main() {}\n</code>\n");
    }

    #[test]
    fn test_image_and_link() {
        let mut out = String::new();
        HtmlBackend::image("a.png", "A", &mut out);
        HtmlBackend::link("https://example.com", "Example", &mut out);
        assert_eq!(
            out,
            "<img src=\"a.png\" alt=\"A\"/>\n<a href=\"https://example.com\" target=\"_blank\">Example</a>"
        );
    }

    #[test]
    fn test_ordered_list_type_cycles_with_depth() {
        let mut out = String::new();
        for depth in 0..4 {
            HtmlBackend::list_start(true, depth, &mut out);
        }
        assert!(out.contains("\n<ol type=\"1\">\n"));
        assert!(out.contains("  <ol type=\"a\">\n"));
        assert!(out.contains("    <ol type=\"i\">\n"));
        assert!(out.contains("      <ol type=\"1\">\n"));
    }

    #[test]
    fn test_list_item_indent() {
        let mut out = String::new();
        HtmlBackend::list_item(false, 1, 0, "x", &mut out);
        assert_eq!(out, "    <li>x</li>\n");
    }

    #[test]
    fn test_alignment_styles() {
        assert_eq!(
            HtmlBackend::alignment_style(Some(Alignment::Middle)),
            "text-align: center;"
        );
        assert_eq!(
            HtmlBackend::alignment_style(Some(Alignment::Left)),
            "text-align: left;"
        );
        assert_eq!(
            HtmlBackend::alignment_style(Some(Alignment::Right)),
            "text-align: right;"
        );
        assert_eq!(HtmlBackend::alignment_style(None), "text-align: inherit;");
    }

    #[test]
    fn test_cell_without_styles() {
        let mut out = String::new();
        HtmlBackend::table_cell("v", None, false, None, &mut out);
        assert_eq!(out, "    <td style=\"text-align: inherit;\">v</td>\n");
    }

    #[test]
    fn test_header_cell_with_styles() {
        let styles = HtmlStyles::new().th_style("color: red;");
        let mut out = String::new();
        HtmlBackend::table_cell("h", Some(Alignment::Middle), true, Some(&styles), &mut out);
        assert_eq!(
            out,
            "    <th style=\"color: red; text-align: center;\"><strong>h</strong></th>\n"
        );
    }

    #[test]
    fn test_table_start_style() {
        let mut out = String::new();
        HtmlBackend::table_start(Some(&HtmlStyles::default()), &mut out);
        HtmlBackend::table_start(Some(&HtmlStyles::new()), &mut out);
        assert_eq!(out, "<table style=\"border: 1px solid #000;\">\n<table>\n");
    }
}
