//! sitemark: Markdown to HTML engine for static-site generation
//!
//! This crate converts a Markdown document into a tree of HTML nodes and
//! serializes that tree to an HTML string. It recognizes the block
//! structures a content site needs (paragraphs, headings, fenced code,
//! block quotes, ordered/unordered lists) and the inline spans inside them
//! (bold, italic, inline code, links, images).
//!
//! # Design Principles
//! - Three stages: block segmentation, inline span lexing, node tree
//!   construction/serialization
//! - One pass over one in-memory document; no streaming, no shared state
//! - Referentially transparent: identical input yields identical output,
//!   so independent callers may convert documents in parallel
//! - Malformed input fails the whole document; no best-effort output
//!
//! Not a CommonMark implementation: tables, nested quotes, footnotes,
//! raw-HTML passthrough, and character escapes are out of scope.

pub mod block;
pub mod builder;
pub mod error;
pub mod inline;
pub mod node;
pub mod page;

// Re-export primary types
pub use block::{classify, segment_blocks, Block, BlockKind};
pub use builder::markdown_to_node;
pub use error::MarkdownError;
pub use inline::{lex_inline, Span, SpanKind};
pub use node::HtmlNode;
pub use page::extract_title;

/// Convert Markdown to HTML.
///
/// This is the primary API for simple use cases. The intermediate node
/// tree is available through [`markdown_to_node`].
///
/// # Errors
/// Fails on the first structural fault in the document; see
/// [`MarkdownError`].
///
/// # Example
/// ```
/// let html = sitemark::to_html("# Hello\n\nWorld").unwrap();
/// assert_eq!(html, "<div><h1>Hello</h1><p>World</p></div>");
/// ```
pub fn to_html(input: &str) -> Result<String, MarkdownError> {
    Ok(markdown_to_node(input)?.to_html())
}
