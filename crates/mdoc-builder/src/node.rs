//! Content node model.
//!
//! A [`Node`] is one unit of document content. Every node renders itself with
//! any [`RenderBackend`]; wrapper nodes resolve their [`Content`] first, which
//! renders a nested node with the same backend instead of stringifying it.

use std::borrow::Cow;

use crate::backend::{Emphasis, RenderBackend};
use crate::html::HtmlBackend;
use crate::list::{ListBuilder, render_list};
use crate::markup::MarkdownBackend;
use crate::numbering::{HeaderNumbering, MAX_HEADER_LEVEL};
use crate::styles::HtmlStyles;
use crate::table::{TableBuilder, render_table};

/// Discriminant of a [`Node`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Header,
    Text,
    List,
    CodeBlock,
    Code,
    Bold,
    Italic,
    BoldItalic,
    Strikethrough,
    BlockQuote,
    LineBreak,
    NewLine,
    Separator,
    Image,
    Link,
    Table,
    CompositeNodes,
}

/// Language tag of a fenced code block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CodeLanguage {
    /// No tag.
    #[default]
    Any,
    C,
    CPlusPlus,
    Json,
    Java,
    JavaScript,
    TypeScript,
    ObjectiveC,
    /// Caller-supplied tag.
    Custom(String),
}

impl CodeLanguage {
    /// Identifier written after the opening fence.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Any => "",
            Self::C => "c",
            Self::CPlusPlus => "cplusplus",
            Self::Json => "json",
            Self::Java => "java",
            Self::JavaScript => "javascript",
            Self::TypeScript => "TypeScript",
            Self::ObjectiveC => "objective-c",
            Self::Custom(tag) => tag.as_str(),
        }
    }
}

/// Payload of content-bearing nodes: a literal string or another node.
#[derive(Clone, Debug)]
pub enum Content {
    Text(String),
    Node(Box<Node>),
}

impl Content {
    /// Resolve to text, rendering a nested node with backend `B`.
    pub fn resolve<B: RenderBackend>(&self, styles: Option<&HtmlStyles>) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text.as_str()),
            Self::Node(node) => Cow::Owned(node.render_to_string::<B>(styles)),
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Node> for Content {
    fn from(node: Node) -> Self {
        Self::Node(Box::new(node))
    }
}

impl<T: Into<Content>> From<Option<T>> for Content {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// One unit of document content.
#[derive(Clone, Debug)]
pub enum Node {
    Header {
        level: u8,
        content: Content,
        numbering: Option<HeaderNumbering>,
    },
    Text(Content),
    Emphasis(Emphasis, Content),
    BlockQuote(Content),
    Code(Content),
    CodeBlock {
        language: CodeLanguage,
        content: Content,
    },
    LineBreak(usize),
    NewLine,
    Separator,
    Image {
        url: String,
        description: String,
    },
    Link {
        url: String,
        title: String,
    },
    List(ListBuilder),
    Table(TableBuilder),
    Composite(Vec<Node>),
}

impl Node {
    /// Heading at `level` (clamped to `1..=6`), numbered by `numbering` if given.
    pub fn header(
        level: u8,
        content: impl Into<Content>,
        numbering: Option<HeaderNumbering>,
    ) -> Self {
        Self::Header {
            level: level.clamp(1, MAX_HEADER_LEVEL),
            content: content.into(),
            numbering,
        }
    }

    pub fn text(content: impl Into<Content>) -> Self {
        Self::Text(content.into())
    }

    pub fn bold(content: impl Into<Content>) -> Self {
        Self::Emphasis(Emphasis::Bold, content.into())
    }

    pub fn italic(content: impl Into<Content>) -> Self {
        Self::Emphasis(Emphasis::Italic, content.into())
    }

    pub fn bold_italic(content: impl Into<Content>) -> Self {
        Self::Emphasis(Emphasis::BoldItalic, content.into())
    }

    pub fn strikethrough(content: impl Into<Content>) -> Self {
        Self::Emphasis(Emphasis::Strikethrough, content.into())
    }

    pub fn block_quote(content: impl Into<Content>) -> Self {
        Self::BlockQuote(content.into())
    }

    pub fn code(content: impl Into<Content>) -> Self {
        Self::Code(content.into())
    }

    pub fn code_block(language: CodeLanguage, content: impl Into<Content>) -> Self {
        Self::CodeBlock {
            language,
            content: content.into(),
        }
    }

    /// A single line break.
    pub fn line_break() -> Self {
        Self::LineBreak(1)
    }

    /// `count` line breaks; zero is treated as one.
    pub fn line_breaks(count: usize) -> Self {
        Self::LineBreak(count.max(1))
    }

    pub fn new_line() -> Self {
        Self::NewLine
    }

    pub fn separator() -> Self {
        Self::Separator
    }

    /// Image whose description is its URL.
    pub fn image(url: impl Into<String>) -> Self {
        Self::image_with_description(url, String::new())
    }

    /// Image with alt text; an empty description falls back to the URL.
    pub fn image_with_description(url: impl Into<String>, description: impl Into<String>) -> Self {
        Self::Image {
            url: url.into(),
            description: description.into(),
        }
    }

    /// Link whose title is its URL.
    pub fn link(url: impl Into<String>) -> Self {
        Self::link_with_title(url, String::new())
    }

    /// Link with a title; an empty title falls back to the URL.
    pub fn link_with_title(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self::Link {
            url: url.into(),
            title: title.into(),
        }
    }

    pub fn list(list: impl Into<ListBuilder>) -> Self {
        Self::List(list.into())
    }

    pub fn table(table: TableBuilder) -> Self {
        Self::Table(table)
    }

    pub fn composite(nodes: impl IntoIterator<Item = Node>) -> Self {
        Self::Composite(nodes.into_iter().collect())
    }

    /// Append a child to a composite node. Other nodes are left unchanged.
    #[must_use]
    pub fn append(mut self, node: Node) -> Self {
        if let Self::Composite(nodes) = &mut self {
            nodes.push(node);
        }
        self
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Header { .. } => NodeKind::Header,
            Self::Text(_) => NodeKind::Text,
            Self::Emphasis(Emphasis::Bold, _) => NodeKind::Bold,
            Self::Emphasis(Emphasis::Italic, _) => NodeKind::Italic,
            Self::Emphasis(Emphasis::BoldItalic, _) => NodeKind::BoldItalic,
            Self::Emphasis(Emphasis::Strikethrough, _) => NodeKind::Strikethrough,
            Self::BlockQuote(_) => NodeKind::BlockQuote,
            Self::Code(_) => NodeKind::Code,
            Self::CodeBlock { .. } => NodeKind::CodeBlock,
            Self::LineBreak(_) => NodeKind::LineBreak,
            Self::NewLine => NodeKind::NewLine,
            Self::Separator => NodeKind::Separator,
            Self::Image { .. } => NodeKind::Image,
            Self::Link { .. } => NodeKind::Link,
            Self::List(_) => NodeKind::List,
            Self::Table(_) => NodeKind::Table,
            Self::Composite(_) => NodeKind::CompositeNodes,
        }
    }

    /// Render as markdown.
    ///
    /// Numbered headers advance their shared counters.
    pub fn to_markdown(&self) -> String {
        self.render_to_string::<MarkdownBackend>(None)
    }

    /// Render as an HTML fragment.
    ///
    /// Numbered headers advance their shared counters.
    pub fn to_html(&self, styles: Option<&HtmlStyles>) -> String {
        self.render_to_string::<HtmlBackend>(styles)
    }

    /// Render with backend `B` into a new string.
    pub fn render_to_string<B: RenderBackend>(&self, styles: Option<&HtmlStyles>) -> String {
        let mut out = String::new();
        self.render::<B>(styles, &mut out);
        out
    }

    /// Render with backend `B`, appending to `out`.
    pub fn render<B: RenderBackend>(&self, styles: Option<&HtmlStyles>, out: &mut String) {
        match self {
            Self::Header {
                level,
                content,
                numbering,
            } => {
                let level = (*level).clamp(1, MAX_HEADER_LEVEL);
                let index = numbering
                    .as_ref()
                    .map(|n| n.next_index(level))
                    .unwrap_or_default();
                B::header(level, &index, &content.resolve::<B>(styles), out);
            }
            Self::Text(content) => B::text(&content.resolve::<B>(styles), out),
            Self::Emphasis(style, content) => {
                B::emphasis(*style, &content.resolve::<B>(styles), out);
            }
            Self::BlockQuote(content) => B::block_quote(&content.resolve::<B>(styles), out),
            Self::Code(content) => B::code(&content.resolve::<B>(styles), out),
            Self::CodeBlock { language, content } => {
                B::code_block(language.as_str(), &content.resolve::<B>(styles), out);
            }
            Self::LineBreak(count) => B::line_break(*count, out),
            Self::NewLine => B::new_line(out),
            Self::Separator => B::separator(out),
            Self::Image { url, description } => {
                B::image(url, or_fallback(description, url), out);
            }
            Self::Link { url, title } => B::link(url, or_fallback(title, url), out),
            Self::List(list) => render_list::<B>(list, styles, out),
            Self::Table(table) => {
                out.push('\n');
                render_table::<B>(table, styles, out);
                out.push('\n');
            }
            Self::Composite(nodes) => {
                for node in nodes {
                    node.render::<B>(styles, out);
                }
            }
        }
    }
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text() {
        let node = Node::text("hello");
        assert_eq!(node.to_markdown(), "hello");
        assert_eq!(node.to_html(None), "<span>hello</span>\n");
    }

    #[test]
    fn test_nested_content_renders_node() {
        let node = Node::bold(Node::text(Node::italic("deep")));
        assert_eq!(node.to_markdown(), "***deep***");
        assert_eq!(
            node.to_html(None),
            "<strong><span><em>deep</em></span>\n</strong>"
        );
    }

    #[test]
    fn test_emphasis_kinds() {
        assert_eq!(Node::bold("x").kind(), NodeKind::Bold);
        assert_eq!(Node::italic("x").kind(), NodeKind::Italic);
        assert_eq!(Node::bold_italic("x").kind(), NodeKind::BoldItalic);
        assert_eq!(Node::strikethrough("x").kind(), NodeKind::Strikethrough);
        assert_eq!(
            Node::bold_italic("x").to_html(None),
            "<strong><em>x</em></strong>"
        );
        assert_eq!(Node::strikethrough("x").to_markdown(), "~~x~~");
    }

    #[test]
    fn test_header_clamps_level() {
        let node = Node::header(9, "Deep", None);
        assert_eq!(node.to_markdown(), "###### Deep\n");
        assert_eq!(node.to_html(None), "<h6>Deep</h6>\n");
        assert_eq!(Node::header(0, "Top", None).to_markdown(), "# Top\n");
    }

    #[test]
    fn test_header_variant_clamps_level_when_rendered() {
        let deep = Node::Header {
            level: 9,
            content: "x".into(),
            numbering: None,
        };
        assert_eq!(deep.to_markdown(), "###### x\n");
        assert_eq!(deep.to_html(None), "<h6>x</h6>\n");

        let numbering = HeaderNumbering::new();
        let top = Node::Header {
            level: 0,
            content: "y".into(),
            numbering: Some(numbering),
        };
        assert_eq!(top.to_markdown(), "# 1. y\n");
        assert_eq!(top.to_html(None), "<h1>2. y</h1>\n");
    }

    #[test]
    fn test_header_with_numbering() {
        let numbering = HeaderNumbering::new();
        let first = Node::header(1, "A", Some(numbering.clone()));
        let second = Node::header(2, "B", Some(numbering));
        assert_eq!(first.to_markdown(), "# 1. A\n");
        assert_eq!(second.to_html(None), "<h2>1.1. B</h2>\n");
    }

    #[test]
    fn test_block_quote() {
        let node = Node::block_quote("line one\nline two\nline three");
        assert_eq!(node.to_markdown(), "> line one\\nline two\nline three\n\n");
        assert_eq!(
            node.to_html(None),
            "\n<blockquote>line one\nline two\nline three</blockquote>\n"
        );
    }

    #[test]
    fn test_nested_block_quote() {
        let node = Node::block_quote(Node::composite([
            Node::text("outer"),
            Node::block_quote("inner"),
        ]));
        assert_eq!(node.to_markdown(), "> outer> inner\\n\n\n\n");
    }

    #[test]
    fn test_code_same_in_both_forms() {
        let node = Node::code("x = 1");
        assert_eq!(node.to_markdown(), "<code>x = 1</code>");
        assert_eq!(node.to_html(None), "<code>x = 1</code>");
    }

    #[test]
    fn test_code_block_languages() {
        let node = Node::code_block(CodeLanguage::Json, "{}");
        assert_eq!(node.to_markdown(), "\n```json\n{}\n```\n");
        assert_eq!(node.to_html(None), "\n<code>\n{}\n</code>\n");
        assert_eq!(CodeLanguage::Any.as_str(), "");
        assert_eq!(CodeLanguage::CPlusPlus.as_str(), "cplusplus");
        assert_eq!(CodeLanguage::ObjectiveC.as_str(), "objective-c");
        assert_eq!(CodeLanguage::Custom("rust".into()).as_str(), "rust");
    }

    #[test]
    fn test_line_breaks() {
        assert_eq!(Node::line_break().to_markdown(), "<br>\n");
        assert_eq!(Node::line_breaks(0).to_html(None), "<br>\n");
        assert_eq!(Node::line_breaks(3).to_markdown(), "<br>\n<br>\n<br>\n");
    }

    #[test]
    fn test_new_line_and_separator() {
        assert_eq!(Node::new_line().to_markdown(), "\n");
        assert_eq!(Node::new_line().to_html(None), "\n");
        assert_eq!(Node::separator().to_markdown(), "---\n");
        assert_eq!(Node::separator().to_html(None), "<hr />\n");
    }

    #[test]
    fn test_image_description_defaults_to_url() {
        let node = Node::image("a.png");
        assert_eq!(node.to_markdown(), "![a.png](a.png)\n");
        assert_eq!(node.to_html(None), "<img src=\"a.png\" alt=\"a.png\"/>\n");

        let node = Node::image_with_description("a.png", "Minion");
        assert_eq!(node.to_markdown(), "![Minion](a.png)\n");
    }

    #[test]
    fn test_link_title_defaults_to_url() {
        let node = Node::link("https://x.io");
        assert_eq!(node.to_markdown(), "[https://x.io](https://x.io)");
        let node = Node::link_with_title("https://x.io", "X");
        assert_eq!(
            node.to_html(None),
            "<a href=\"https://x.io\" target=\"_blank\">X</a>"
        );
    }

    #[test]
    fn test_composite_concatenates_children() {
        let a = Node::text("Inline ");
        let b = Node::code("code");
        let composite = Node::composite([a.clone(), b.clone()]);
        assert_eq!(
            composite.to_markdown(),
            format!("{}{}", a.to_markdown(), b.to_markdown())
        );
        assert_eq!(
            composite.to_html(None),
            format!("{}{}", a.to_html(None), b.to_html(None))
        );
    }

    #[test]
    fn test_composite_append() {
        let node = Node::composite([Node::text("a")]).append(Node::text("b"));
        assert_eq!(node.to_markdown(), "ab");
        // Appending to a non-composite is a no-op.
        assert_eq!(Node::text("a").append(Node::text("b")).to_markdown(), "a");
    }

    #[test]
    fn test_absent_content_is_empty() {
        let node = Node::bold(None::<&str>);
        assert_eq!(node.to_markdown(), "****");
    }
}
