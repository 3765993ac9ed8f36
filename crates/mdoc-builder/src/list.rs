//! List builder and the recursive list renderer.

use crate::backend::RenderBackend;
use crate::node::Node;
use crate::styles::HtmlStyles;

/// One entry of a list.
#[derive(Clone, Debug)]
pub enum ListItem {
    /// Literal text.
    Value(String),
    /// Rich content rendered with the list's backend.
    Node(Node),
    /// Nested entries that share the parent's ordered flag.
    Items(Vec<ListItem>),
    /// Nested list with its own ordered flag.
    List(ListBuilder),
}

impl From<&str> for ListItem {
    fn from(value: &str) -> Self {
        Self::Value(value.to_owned())
    }
}

impl From<String> for ListItem {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl From<Node> for ListItem {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<ListBuilder> for ListItem {
    fn from(list: ListBuilder) -> Self {
        Self::List(list)
    }
}

impl<T: Into<ListItem>> From<Vec<T>> for ListItem {
    fn from(items: Vec<T>) -> Self {
        Self::Items(items.into_iter().map(Into::into).collect())
    }
}

/// Ordered or unordered list of strings, nodes and nested lists.
///
/// Nesting depth is not stored on the items; it is tracked while rendering.
#[derive(Clone, Debug, Default)]
pub struct ListBuilder {
    items: Vec<ListItem>,
    ordered: bool,
}

impl ListBuilder {
    /// Create an empty unordered list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list from existing items.
    #[must_use]
    pub fn from_items<I, T>(items: I, ordered: bool) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ListItem>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            ordered,
        }
    }

    /// Append one item.
    #[must_use]
    pub fn append(mut self, item: impl Into<ListItem>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Append several items.
    #[must_use]
    pub fn extend<I, T>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ListItem>,
    {
        self.items.extend(items.into_iter().map(Into::into));
        self
    }

    /// Number items (`1.`, `2.`, ...).
    #[must_use]
    pub fn ordered(mut self) -> Self {
        self.ordered = true;
        self
    }

    /// Bullet items (`-`).
    #[must_use]
    pub fn unordered(mut self) -> Self {
        self.ordered = false;
        self
    }

    pub fn is_ordered(&self) -> bool {
        self.ordered
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Into<ListItem>> From<Vec<T>> for ListBuilder {
    fn from(items: Vec<T>) -> Self {
        Self::from_items(items, false)
    }
}

/// Render a list with backend `B`.
pub(crate) fn render_list<B: RenderBackend>(
    list: &ListBuilder,
    styles: Option<&HtmlStyles>,
    out: &mut String,
) {
    render_items::<B>(&list.items, list.ordered, 0, styles, out);
}

fn render_items<B: RenderBackend>(
    items: &[ListItem],
    ordered: bool,
    depth: usize,
    styles: Option<&HtmlStyles>,
    out: &mut String,
) {
    B::list_start(ordered, depth, out);

    // Nested lists do not consume a number in their parent.
    let mut position = 0;
    for item in items {
        match item {
            ListItem::Items(nested) => {
                render_items::<B>(nested, ordered, depth + 1, styles, out);
            }
            ListItem::List(nested) => {
                render_items::<B>(&nested.items, nested.ordered, depth + 1, styles, out);
            }
            ListItem::Node(node) => {
                let content = node.render_to_string::<B>(styles);
                B::list_item(ordered, depth, position, &content, out);
                position += 1;
            }
            ListItem::Value(value) => {
                B::list_item(ordered, depth, position, value, out);
                position += 1;
            }
        }
    }

    B::list_end(ordered, depth, out);
}
