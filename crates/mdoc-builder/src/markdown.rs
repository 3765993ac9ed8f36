//! Free-function constructors for nodes and builders.
//!
//! Convenient for nesting content inline:
//!
//! ```
//! use mdoc_builder::markdown;
//!
//! let node = markdown::text(markdown::italic("emphasis"));
//! assert_eq!(node.to_markdown(), "*emphasis*");
//! ```

use crate::builder::DocumentBuilder;
use crate::list::{ListBuilder, ListItem};
use crate::node::{CodeLanguage, Content, Node};
use crate::styles::HtmlStyles;
use crate::table::TableBuilder;

pub fn bold(content: impl Into<Content>) -> Node {
    Node::bold(content)
}

pub fn italic(content: impl Into<Content>) -> Node {
    Node::italic(content)
}

pub fn bold_italic(content: impl Into<Content>) -> Node {
    Node::bold_italic(content)
}

pub fn strikethrough(content: impl Into<Content>) -> Node {
    Node::strikethrough(content)
}

pub fn text(content: impl Into<Content>) -> Node {
    Node::text(content)
}

pub fn block_quote(content: impl Into<Content>) -> Node {
    Node::block_quote(content)
}

pub fn code(content: impl Into<Content>) -> Node {
    Node::code(content)
}

pub fn code_block(language: CodeLanguage, content: impl Into<Content>) -> Node {
    Node::code_block(language, content)
}

pub fn line_break() -> Node {
    Node::line_break()
}

pub fn new_line() -> Node {
    Node::new_line()
}

pub fn separator() -> Node {
    Node::separator()
}

pub fn image(url: impl Into<String>, description: impl Into<String>) -> Node {
    Node::image_with_description(url, description)
}

pub fn link(url: impl Into<String>, title: impl Into<String>) -> Node {
    Node::link_with_title(url, title)
}

pub fn table(table: TableBuilder) -> Node {
    Node::table(table)
}

pub fn list(list: impl Into<ListBuilder>) -> Node {
    Node::list(list)
}

/// Composite of `nodes`, or `None` when there are none.
pub fn composite_nodes(nodes: impl IntoIterator<Item = Node>) -> Option<Node> {
    let nodes: Vec<Node> = nodes.into_iter().collect();
    (!nodes.is_empty()).then(|| Node::Composite(nodes))
}

pub fn new_builder() -> DocumentBuilder {
    DocumentBuilder::new()
}

pub fn new_table_builder(rows: usize, cols: usize) -> TableBuilder {
    TableBuilder::new(rows, cols)
}

pub fn new_list_builder<I, T>(items: I, ordered: bool) -> ListBuilder
where
    I: IntoIterator<Item = T>,
    T: Into<ListItem>,
{
    ListBuilder::from_items(items, ordered)
}

pub fn new_html_styles() -> HtmlStyles {
    HtmlStyles::new()
}

pub fn default_html_styles() -> HtmlStyles {
    HtmlStyles::default_styles()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_nodes_empty_is_none() {
        assert!(composite_nodes(Vec::new()).is_none());
        let node = composite_nodes([text("a"), code("b")]).unwrap();
        assert_eq!(node.to_markdown(), "a<code>b</code>");
    }

    #[test]
    fn test_image_and_link_with_empty_description() {
        assert_eq!(image("u.png", "").to_markdown(), "![u.png](u.png)\n");
        assert_eq!(
            link("https://a.b", "").to_markdown(),
            "[https://a.b](https://a.b)"
        );
    }

    #[test]
    fn test_new_list_builder() {
        let list = new_list_builder(["x", "y"], true);
        assert_eq!(list.len(), 2);
        assert!(list.is_ordered());
        assert_eq!(super::list(list).to_markdown(), "\n1. x\n2. y\n\n");
    }
}
