//! Tree builder: orchestrates the block scanner and inline lexer into one
//! HTML node tree per document.

use crate::block::{self, Block, BlockKind};
use crate::error::MarkdownError;
use crate::inline::{lex_inline, Span, SpanKind};
use crate::node::HtmlNode;

/// Convert a whole Markdown document into an HTML node tree.
///
/// The root is always a `div` parent with one child per block.
///
/// # Errors
/// Any inline or list-numbering fault aborts the whole document; see
/// [`MarkdownError`].
///
/// # Example
/// ```
/// use sitemark::markdown_to_node;
///
/// let root = markdown_to_node("# Hello").unwrap();
/// assert_eq!(root.to_html(), "<div><h1>Hello</h1></div>");
/// ```
pub fn markdown_to_node(document: &str) -> Result<HtmlNode, MarkdownError> {
    let mut children = Vec::new();
    for b in block::segment_blocks(document) {
        children.push(block_to_node(b)?);
    }
    Ok(HtmlNode::parent("div", children))
}

/// Build the top-level node for one classified block.
fn block_to_node(b: Block<'_>) -> Result<HtmlNode, MarkdownError> {
    match b.kind {
        BlockKind::Heading => {
            let (level, text) = block::heading_parts(b.text);
            Ok(HtmlNode::parent(
                &format!("h{level}"),
                inline_children(text)?,
            ))
        }
        BlockKind::Quote => {
            let text = block::dequote(b.text);
            Ok(HtmlNode::parent("blockquote", inline_children(&text)?))
        }
        BlockKind::UnorderedList => {
            let items = block::unordered_items(b.text);
            Ok(HtmlNode::parent("ul", list_items(&items)?))
        }
        BlockKind::OrderedList => {
            let items = block::ordered_items(b.text)?;
            Ok(HtmlNode::parent("ol", list_items(&items)?))
        }
        BlockKind::Code => {
            // Code content is raw text: a single untagged leaf, never
            // passed through the inline lexer.
            let code = HtmlNode::parent("code", vec![HtmlNode::text(block::code_text(b.text))]);
            Ok(HtmlNode::parent("pre", vec![code]))
        }
        BlockKind::Paragraph => {
            let text = block::collapse_paragraph(b.text);
            Ok(HtmlNode::parent("p", inline_children(&text)?))
        }
    }
}

/// One `li` parent per item line, each inline-lexed independently.
fn list_items(items: &[&str]) -> Result<Vec<HtmlNode>, MarkdownError> {
    items
        .iter()
        .map(|item| Ok(HtmlNode::parent("li", inline_children(item)?)))
        .collect()
}

/// Lex a run of text and map each span to its leaf node.
fn inline_children(text: &str) -> Result<Vec<HtmlNode>, MarkdownError> {
    Ok(lex_inline(text)?.into_iter().map(span_to_leaf).collect())
}

/// Map one typed span to its leaf node.
fn span_to_leaf(span: Span) -> HtmlNode {
    match span.kind {
        SpanKind::Text => HtmlNode::text(span.text),
        SpanKind::Bold => HtmlNode::leaf("b", span.text),
        SpanKind::Italic => HtmlNode::leaf("i", span.text),
        SpanKind::Code => HtmlNode::leaf("code", span.text),
        SpanKind::Link => {
            let url = span.url.unwrap_or_default();
            HtmlNode::leaf_with_attrs("a", span.text, vec![("href".to_string(), url)])
        }
        SpanKind::Image => {
            // Alt text travels as an attribute; the element content stays
            // empty.
            let url = span.url.unwrap_or_default();
            HtmlNode::leaf_with_attrs(
                "img",
                "",
                vec![("src".to_string(), url), ("alt".to_string(), span.text)],
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_html(md: &str) -> String {
        markdown_to_node(md).unwrap().to_html()
    }

    #[test]
    fn empty_document_is_bare_div() {
        assert_eq!(to_html(""), "<div></div>");
    }

    #[test]
    fn heading_levels_map_to_tags() {
        assert_eq!(to_html("# one"), "<div><h1>one</h1></div>");
        assert_eq!(to_html("###### six"), "<div><h6>six</h6></div>");
    }

    #[test]
    fn quote_block() {
        assert_eq!(
            to_html("> quoted **bold**\n> second line"),
            "<div><blockquote>quoted <b>bold</b>\nsecond line</blockquote></div>"
        );
    }

    #[test]
    fn ordered_list_items_lexed_per_line() {
        assert_eq!(
            to_html("1. first _item_\n2. second"),
            "<div><ol><li>first <i>item</i></li><li>second</li></ol></div>"
        );
    }

    #[test]
    fn code_block_content_is_not_inline_lexed() {
        // Underscores and asterisks inside a fence stay literal.
        assert_eq!(
            to_html("```\nlet _x = **y;\n```"),
            "<div><pre><code>let _x = **y;\n</code></pre></div>"
        );
    }

    #[test]
    fn link_leaf_carries_href() {
        assert_eq!(
            to_html("[home](/index.html)"),
            "<div><p><a href=\"/index.html\">home</a></p></div>"
        );
    }

    #[test]
    fn image_leaf_has_empty_content() {
        assert_eq!(
            to_html("![logo](/logo.png)"),
            "<div><p><img src=\"/logo.png\" alt=\"logo\"></img></p></div>"
        );
    }

    #[test]
    fn broken_sequence_renders_as_paragraph() {
        assert_eq!(
            to_html("1. a\n2. b\n4. c"),
            "<div><p>1. a 2. b 4. c</p></div>"
        );
    }

    #[test]
    fn unclosed_delimiter_aborts_document() {
        let err = markdown_to_node("fine paragraph\n\nbroken **bold").unwrap_err();
        assert_eq!(
            err,
            MarkdownError::UnclosedDelimiter {
                text: "broken **bold".to_string()
            }
        );
    }
}
