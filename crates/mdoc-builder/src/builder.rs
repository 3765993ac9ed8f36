//! Top-level document builder.

use std::fmt::Write;

use crate::html::HtmlBackend;
use crate::list::ListBuilder;
use crate::markup::MarkdownBackend;
use crate::node::{CodeLanguage, Content, Node};
use crate::numbering::HeaderNumbering;
use crate::styles::HtmlStyles;
use crate::table::TableBuilder;

/// Accumulates top-level nodes and renders the whole document.
///
/// Headers are numbered by a [`HeaderNumbering`] handle owned by the builder
/// and shared with every header it creates. Numbering is enabled by default.
///
/// # Example
///
/// ```
/// use mdoc_builder::DocumentBuilder;
///
/// let mut builder = DocumentBuilder::new();
/// builder.h1("Usage").h2("Install").h1("API");
///
/// assert_eq!(builder.to_markdown(), "# 1. Usage\n## 1.1. Install\n# 2. API\n");
/// ```
#[derive(Debug)]
pub struct DocumentBuilder {
    title: String,
    numbering: Option<HeaderNumbering>,
    nodes: Vec<Node>,
}

impl DocumentBuilder {
    /// Create an empty document with header numbering enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: String::new(),
            numbering: Some(HeaderNumbering::new()),
            nodes: Vec::new(),
        }
    }

    /// Set the title embedded in the HTML page shell.
    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    /// Enable or disable header numbering for headers added afterwards.
    ///
    /// Enabling installs fresh counters; headers added earlier keep theirs,
    /// and [`reset_header_indicator`](Self::reset_header_indicator) no longer
    /// reaches them.
    pub fn header_ordered(&mut self, ordered: bool) -> &mut Self {
        self.numbering = ordered.then(HeaderNumbering::new);
        self
    }

    /// Restart numbering, e.g. before rendering the document a second time.
    ///
    /// Only the current counters are reset. Headers added before the last
    /// [`header_ordered(true)`](Self::header_ordered) call keep counting on
    /// their own engine.
    pub fn reset_header_indicator(&mut self) -> &mut Self {
        if let Some(numbering) = &self.numbering {
            numbering.reset();
        }
        self
    }

    pub fn h1(&mut self, content: impl Into<Content>) -> &mut Self {
        self.h(1, content)
    }

    pub fn h2(&mut self, content: impl Into<Content>) -> &mut Self {
        self.h(2, content)
    }

    pub fn h3(&mut self, content: impl Into<Content>) -> &mut Self {
        self.h(3, content)
    }

    pub fn h4(&mut self, content: impl Into<Content>) -> &mut Self {
        self.h(4, content)
    }

    pub fn h5(&mut self, content: impl Into<Content>) -> &mut Self {
        self.h(5, content)
    }

    pub fn h6(&mut self, content: impl Into<Content>) -> &mut Self {
        self.h(6, content)
    }

    /// Add a header at `level` (clamped to `1..=6`).
    pub fn h(&mut self, level: u8, content: impl Into<Content>) -> &mut Self {
        let node = Node::header(level, content, self.numbering.clone());
        self.append_node(node)
    }

    pub fn text(&mut self, content: impl Into<Content>) -> &mut Self {
        self.append_node(Node::text(content))
    }

    pub fn bold(&mut self, content: impl Into<Content>) -> &mut Self {
        self.append_node(Node::bold(content))
    }

    pub fn italic(&mut self, content: impl Into<Content>) -> &mut Self {
        self.append_node(Node::italic(content))
    }

    pub fn bold_italic(&mut self, content: impl Into<Content>) -> &mut Self {
        self.append_node(Node::bold_italic(content))
    }

    pub fn strikethrough(&mut self, content: impl Into<Content>) -> &mut Self {
        self.append_node(Node::strikethrough(content))
    }

    pub fn block_quote(&mut self, content: impl Into<Content>) -> &mut Self {
        self.append_node(Node::block_quote(content))
    }

    pub fn code(&mut self, content: impl Into<Content>) -> &mut Self {
        self.append_node(Node::code(content))
    }

    pub fn code_block(&mut self, language: CodeLanguage, content: impl Into<Content>) -> &mut Self {
        self.append_node(Node::code_block(language, content))
    }

    pub fn line_break(&mut self) -> &mut Self {
        self.append_node(Node::line_break())
    }

    pub fn line_breaks(&mut self, count: usize) -> &mut Self {
        self.append_node(Node::line_breaks(count))
    }

    pub fn new_line(&mut self) -> &mut Self {
        self.append_node(Node::new_line())
    }

    pub fn separator(&mut self) -> &mut Self {
        self.append_node(Node::separator())
    }

    pub fn image(&mut self, url: impl Into<String>) -> &mut Self {
        self.append_node(Node::image(url))
    }

    pub fn image_with_description(
        &mut self,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> &mut Self {
        self.append_node(Node::image_with_description(url, description))
    }

    pub fn link(&mut self, url: impl Into<String>) -> &mut Self {
        self.append_node(Node::link(url))
    }

    pub fn link_with_title(
        &mut self,
        url: impl Into<String>,
        title: impl Into<String>,
    ) -> &mut Self {
        self.append_node(Node::link_with_title(url, title))
    }

    pub fn table(&mut self, table: TableBuilder) -> &mut Self {
        self.append_node(Node::table(table))
    }

    pub fn list(&mut self, list: impl Into<ListBuilder>) -> &mut Self {
        self.append_node(Node::list(list))
    }

    /// Add a composite node. An empty set of nodes adds nothing.
    pub fn composite_nodes(&mut self, nodes: impl IntoIterator<Item = Node>) -> &mut Self {
        let nodes: Vec<Node> = nodes.into_iter().collect();
        if !nodes.is_empty() {
            self.nodes.push(Node::Composite(nodes));
        }
        self
    }

    pub fn append_node(&mut self, node: Node) -> &mut Self {
        self.nodes.push(node);
        self
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Render the document as markdown.
    ///
    /// With numbering enabled this advances the header counters, so a second
    /// call continues counting unless [`reset_header_indicator`](Self::reset_header_indicator)
    /// is called first.
    pub fn to_markdown(&self) -> String {
        let mut out = String::with_capacity(4096);
        for node in &self.nodes {
            node.render::<MarkdownBackend>(None, &mut out);
        }
        tracing::debug!(
            nodes = self.nodes.len(),
            len = out.len(),
            "Rendered markdown"
        );
        out
    }

    /// Render the document as an HTML page.
    ///
    /// Advances the header counters like [`to_markdown`](Self::to_markdown).
    pub fn to_html(&self, styles: Option<&HtmlStyles>) -> String {
        let mut content = String::with_capacity(4096);
        for node in &self.nodes {
            node.render::<HtmlBackend>(styles, &mut content);
        }
        tracing::debug!(
            nodes = self.nodes.len(),
            len = content.len(),
            "Rendered HTML"
        );

        let css = styles
            .and_then(HtmlStyles::global_css_content)
            .unwrap_or_default();

        let mut out = String::with_capacity(content.len() + css.len() + 128);
        write!(
            out,
            r#"<html>
<header>
  <title>{title}</title>

  <style type="text/css">
    {css}
  </style>
</header>

<body>
{content}
</body>
</html>"#,
            title = self.title,
        )
        .unwrap();
        out
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
