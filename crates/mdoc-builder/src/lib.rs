//! Fluent document builder with pluggable render backends.
//!
//! Documents are assembled in memory from [`Node`]s (headings, emphasis,
//! quotes, code, lists, tables, links, images) and serialized to either
//! lightweight markdown or an HTML page.
//!
//! # Architecture
//!
//! Rendering is a depth-first walk over the node tree that is generic over
//! the [`RenderBackend`] trait:
//! - [`MarkdownBackend`]: Produces lightweight markdown
//! - [`HtmlBackend`]: Produces an HTML fragment, styled by [`HtmlStyles`]
//!
//! Shared behavior (content resolution, list nesting and numbering, table
//! cell iteration) is handled by the generic walk, while format-specific
//! syntax is delegated to the backend.
//!
//! Headings built by a [`DocumentBuilder`] share one [`HeaderNumbering`]
//! handle. Rendering advances its counters, so call
//! [`DocumentBuilder::reset_header_indicator`] before rendering the same
//! document a second time.
//!
//! # Example
//!
//! ```
//! use mdoc_builder::{DocumentBuilder, markdown};
//!
//! let mut builder = DocumentBuilder::new();
//! builder
//!     .title("Notes")
//!     .h1("Intro")
//!     .text(markdown::bold("Hello"));
//!
//! assert_eq!(builder.to_markdown(), "# 1. Intro\n**Hello**");
//! ```

mod backend;
mod builder;
mod html;
mod list;
pub mod markdown;
mod markup;
mod node;
mod numbering;
mod styles;
mod table;

pub use backend::{Emphasis, RenderBackend};
pub use builder::DocumentBuilder;
pub use html::HtmlBackend;
pub use list::{ListBuilder, ListItem};
pub use markup::MarkdownBackend;
pub use node::{CodeLanguage, Content, Node, NodeKind};
pub use numbering::{HeaderIndicator, HeaderNumbering, MAX_HEADER_LEVEL};
pub use styles::HtmlStyles;
pub use table::{Alignment, DEFAULT_ALIGN_INDICATOR, TableBuilder};
