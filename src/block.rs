//! Block scanner.
//!
//! Line-oriented: a document is split into blocks on blank lines, and each
//! block is classified by the shape of its lines. Handles:
//! - ATX headings
//! - Fenced code blocks
//! - Blockquotes
//! - Unordered and ordered lists
//! - Paragraphs
//!
//! Blocks borrow from the input; nothing is copied until the tree builder
//! needs per-kind extracted text.

use crate::error::MarkdownError;

/// Structural type of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Default block type.
    Paragraph,
    /// `#`–`######` heading.
    Heading,
    /// Triple-backtick fenced code block.
    Code,
    /// Blockquote: every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Line *i* starts with `"{i}. "`, sequentially from 1.
    OrderedList,
}

/// One block of the source document, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// Raw block text. Internal newlines are retained; surrounding blank
    /// lines are already stripped.
    pub text: &'a str,
    /// Structural type.
    pub kind: BlockKind,
}

/// Split a document into classified blocks on blank-line boundaries.
///
/// Segments are trimmed and empty ones dropped, so runs of three or more
/// newlines separate blocks just like a single blank line. Block order
/// matches source order.
///
/// # Example
/// ```
/// use sitemark::block::{segment_blocks, BlockKind};
///
/// let blocks = segment_blocks("# Title\n\nBody text");
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[0].kind, BlockKind::Heading);
/// assert_eq!(blocks[1].kind, BlockKind::Paragraph);
/// ```
pub fn segment_blocks(document: &str) -> Vec<Block<'_>> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|text| Block {
            text,
            kind: classify(text),
        })
        .collect()
}

/// Classify one block's structural type. First matching rule wins.
pub fn classify(text: &str) -> BlockKind {
    if heading_level(text).is_some() {
        return BlockKind::Heading;
    }
    if text.starts_with("```") && text.ends_with("```") {
        return BlockKind::Code;
    }
    if text.lines().all(|line| line.starts_with('>')) {
        return BlockKind::Quote;
    }
    if text.lines().all(|line| line.starts_with("- ")) {
        return BlockKind::UnorderedList;
    }
    if is_sequential_list(text) {
        return BlockKind::OrderedList;
    }
    BlockKind::Paragraph
}

/// Heading level (1–6) if the block starts with a `#` run followed by a
/// space; `None` otherwise. Seven or more `#` disqualify.
fn heading_level(text: &str) -> Option<u8> {
    let hashes = text.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&hashes) && text.as_bytes().get(hashes) == Some(&b' ') {
        Some(hashes as u8)
    } else {
        None
    }
}

/// True if line *i* (1-indexed) starts with `"{i}. "` for every line.
fn is_sequential_list(text: &str) -> bool {
    text.lines()
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
}

/// Heading level and text: the `#` run and the following space(s) stripped.
///
/// Only called for blocks classified [`BlockKind::Heading`], so the prefix
/// is known to be present. Stripping is strict: exactly the hash run, then
/// leading spaces.
pub fn heading_parts(text: &str) -> (u8, &str) {
    let level = heading_level(text).unwrap_or(1);
    let rest = text[level as usize..].trim_start_matches(' ');
    (level, rest)
}

/// Quote text: one `>` and one optional following space removed per line,
/// lines rejoined with `\n` so inline spans may cross line boundaries.
pub fn dequote(text: &str) -> String {
    text.lines()
        .map(|line| {
            let line = line.strip_prefix('>').unwrap_or(line);
            line.strip_prefix(' ').unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// List item texts: the `- ` prefix stripped from each line.
pub fn unordered_items(text: &str) -> Vec<&str> {
    text.lines()
        .map(|line| line.strip_prefix("- ").unwrap_or(line))
        .collect()
}

/// Ordered list item texts: the `"{i}. "` prefix stripped from each line,
/// re-validating that numbering is exactly sequential from 1.
///
/// # Errors
/// [`MarkdownError::SequenceMismatch`] naming the first offending line.
pub fn ordered_items(text: &str) -> Result<Vec<&str>, MarkdownError> {
    text.lines()
        .enumerate()
        .map(|(i, line)| {
            let prefix = format!("{}. ", i + 1);
            line.strip_prefix(&prefix)
                .ok_or_else(|| MarkdownError::SequenceMismatch {
                    line: line.to_string(),
                })
        })
        .collect()
}

/// Code block content with the fence delimiters stripped.
///
/// A fence followed immediately by a newline loses the newline too, so
/// `` ```\ncode\n``` `` yields `"code\n"` (the trailing newline before the
/// closing fence is preserved). Content is raw text, never inline-lexed.
pub fn code_text(text: &str) -> &str {
    let body = text
        .strip_prefix("```\n")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    body.strip_suffix("```").unwrap_or(body)
}

/// Paragraph text with internal line breaks collapsed: lines are trimmed,
/// empty lines dropped, and survivors joined with single spaces.
pub fn collapse_paragraph(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_drop_blank_runs() {
        let md = "\nFirst paragraph\n\n\n\nSecond paragraph\n\n\n- a list\n- item\n";
        let blocks = segment_blocks(md);
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].text, "First paragraph");
        assert_eq!(blocks[1].text, "Second paragraph");
        assert_eq!(blocks[2].text, "- a list\n- item");
        assert_eq!(blocks[2].kind, BlockKind::UnorderedList);
    }

    #[test]
    fn no_separator_yields_one_block() {
        let blocks = segment_blocks("single line one\nsingle line two");
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn empty_document_yields_no_blocks() {
        assert!(segment_blocks("").is_empty());
        assert!(segment_blocks("\n\n\n").is_empty());
    }

    #[test]
    fn multiline_paragraph_keeps_internal_newline() {
        let blocks = segment_blocks("line one\nline two\n\nnext");
        assert_eq!(blocks[0].text, "line one\nline two");
    }

    #[test]
    fn classify_heading_levels() {
        assert_eq!(classify("# h1"), BlockKind::Heading);
        assert_eq!(classify("###### h6"), BlockKind::Heading);
        assert_eq!(heading_parts("### deep heading"), (3, "deep heading"));
    }

    #[test]
    fn seven_hashes_is_paragraph() {
        assert_eq!(classify("####### x"), BlockKind::Paragraph);
    }

    #[test]
    fn hash_without_space_is_paragraph() {
        assert_eq!(classify("#nospace"), BlockKind::Paragraph);
    }

    #[test]
    fn heading_may_continue_on_next_line() {
        assert_eq!(classify("## heading\ncontinued"), BlockKind::Heading);
    }

    #[test]
    fn classify_code_fence() {
        assert_eq!(classify("```\nlet x = 1;\n```"), BlockKind::Code);
        // A lone fence both starts and ends with backticks.
        assert_eq!(classify("```"), BlockKind::Code);
    }

    #[test]
    fn classify_quote_requires_every_line() {
        assert_eq!(classify("> a\n> b"), BlockKind::Quote);
        assert_eq!(classify("> a\nb"), BlockKind::Paragraph);
    }

    #[test]
    fn classify_unordered_list() {
        assert_eq!(classify("- one\n- two"), BlockKind::UnorderedList);
        assert_eq!(classify("- one\n-two"), BlockKind::Paragraph);
    }

    #[test]
    fn classify_ordered_list() {
        assert_eq!(classify("1. a\n2. b\n3. c"), BlockKind::OrderedList);
    }

    #[test]
    fn sequence_break_demotes_to_paragraph() {
        assert_eq!(classify("1. a\n2. b\n4. c"), BlockKind::Paragraph);
        assert_eq!(classify("2. starts wrong"), BlockKind::Paragraph);
        assert_eq!(classify("1. a\n2. b\n3 . typo"), BlockKind::Paragraph);
    }

    #[test]
    fn dequote_strips_one_prefix_per_line() {
        assert_eq!(dequote("> quoted\n> lines"), "quoted\nlines");
        // Strict stripping: only one marker comes off.
        assert_eq!(dequote(">> nested"), "> nested");
        assert_eq!(dequote(">bare"), "bare");
    }

    #[test]
    fn heading_parts_strict() {
        assert_eq!(heading_parts("# title"), (1, "title"));
        assert_eq!(heading_parts("##  double space"), (2, "double space"));
    }

    #[test]
    fn unordered_items_strip_prefix() {
        assert_eq!(unordered_items("- one\n- two"), vec!["one", "two"]);
    }

    #[test]
    fn ordered_items_strip_and_validate() {
        assert_eq!(ordered_items("1. a\n2. b").unwrap(), vec!["a", "b"]);
        let err = ordered_items("1. a\n3. b").unwrap_err();
        assert_eq!(
            err,
            MarkdownError::SequenceMismatch {
                line: "3. b".to_string()
            }
        );
    }

    #[test]
    fn code_text_strips_fences() {
        assert_eq!(code_text("```\ncode line\n```"), "code line\n");
        assert_eq!(code_text("```inline```"), "inline");
        assert_eq!(code_text("```"), "");
    }

    #[test]
    fn collapse_paragraph_joins_lines() {
        assert_eq!(
            collapse_paragraph("first line\n  second line  \nthird"),
            "first line second line third"
        );
    }
}
