//! Inline span lexer.
//!
//! Converts one run of block text into an ordered list of typed spans via a
//! fixed pipeline of five passes: `**` bold, `_` italic, `` ` `` code, then
//! image and link extraction. Each pass re-splits only the `Text` spans the
//! previous pass produced; already-typed spans flow through untouched.

use memchr::memmem;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::MarkdownError;

/// `![alt](url)` — alt text may not contain brackets, url may not contain
/// parens; both may be empty.
static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").unwrap());

/// `[text](url)` candidate; image occurrences are excluded with a manual
/// preceding-byte check, since the regex crate has no lookbehind.
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").unwrap());

/// The inline type of a [`Span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Plain text, rendered without a wrapping tag.
    Text,
    /// `**bold**`
    Bold,
    /// `_italic_`
    Italic,
    /// `` `code` ``
    Code,
    /// `[text](url)`
    Link,
    /// `![alt](url)`
    Image,
}

/// One typed run of inline text.
///
/// `url` is present only for `Link` and `Image` spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Inline type.
    pub kind: SpanKind,
    /// Text content (alt text for images, link text for links).
    pub text: String,
    /// Destination URL for links and images.
    pub url: Option<String>,
}

impl Span {
    /// Create a span without a URL.
    pub fn new(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            url: None,
        }
    }

    /// Create a plain text span.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Text, text)
    }

    /// Create a link or image span with its URL.
    pub fn with_url(kind: SpanKind, text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            url: Some(url.into()),
        }
    }
}

/// Lex one run of text into typed spans.
///
/// # Errors
/// Returns [`MarkdownError::UnclosedDelimiter`] if a `**`, `_`, or `` ` ``
/// delimiter is unmatched in any text run.
///
/// # Example
/// ```
/// use sitemark::inline::{lex_inline, SpanKind};
///
/// let spans = lex_inline("plain **bold** plain").unwrap();
/// assert_eq!(spans[1].kind, SpanKind::Bold);
/// assert_eq!(spans[1].text, "bold");
/// ```
pub fn lex_inline(text: &str) -> Result<Vec<Span>, MarkdownError> {
    let spans = vec![Span::text(text)];
    let spans = split_spans_delimiter(spans, "**", SpanKind::Bold)?;
    let spans = split_spans_delimiter(spans, "_", SpanKind::Italic)?;
    let spans = split_spans_delimiter(spans, "`", SpanKind::Code)?;
    let spans = split_spans_image(spans);
    let spans = split_spans_link(spans);
    Ok(spans)
}

/// Split the `Text` spans of `spans` on `delim`, typing odd-indexed pieces
/// as `kind`. Empty pieces are kept as zero-length `Text` spans so that
/// delimiter-adjacent boundaries stay well-defined.
fn split_spans_delimiter(
    spans: Vec<Span>,
    delim: &str,
    kind: SpanKind,
) -> Result<Vec<Span>, MarkdownError> {
    let finder = memmem::Finder::new(delim);
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if span.kind != SpanKind::Text {
            out.push(span);
            continue;
        }
        let pieces = split_pieces(&span.text, &finder, delim.len());
        // An even piece count means an odd number of delimiters: unclosed.
        if pieces.len() % 2 == 0 {
            return Err(MarkdownError::UnclosedDelimiter { text: span.text });
        }
        for (i, piece) in pieces.into_iter().enumerate() {
            if i % 2 == 1 {
                out.push(Span::new(kind, piece));
            } else {
                out.push(Span::text(piece));
            }
        }
    }
    Ok(out)
}

/// Slice `text` into the pieces between non-overlapping occurrences of the
/// delimiter. Always yields at least one piece.
fn split_pieces<'a>(text: &'a str, finder: &memmem::Finder<'_>, delim_len: usize) -> Vec<&'a str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for pos in finder.find_iter(text.as_bytes()) {
        pieces.push(&text[start..pos]);
        start = pos + delim_len;
    }
    pieces.push(&text[start..]);
    pieces
}

/// Replace `![alt](url)` occurrences in `Text` spans with `Image` spans,
/// strictly left to right (first remaining match each iteration).
fn split_spans_image(spans: Vec<Span>) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if span.kind != SpanKind::Text || IMAGE_RE.find(&span.text).is_none() {
            // Untouched spans pass through whole, including zero-length
            // Text spans produced by the delimiter passes.
            out.push(span);
            continue;
        }
        let mut rest = span.text.as_str();
        while let Some(caps) = IMAGE_RE.captures(rest) {
            let whole = caps.get(0).unwrap();
            let before = &rest[..whole.start()];
            if !before.is_empty() {
                out.push(Span::text(before));
            }
            out.push(Span::with_url(SpanKind::Image, &caps[1], &caps[2]));
            rest = &rest[whole.end()..];
        }
        if !rest.is_empty() {
            out.push(Span::text(rest));
        }
    }
    out
}

/// Replace `[text](url)` occurrences in `Text` spans with `Link` spans,
/// skipping matches immediately preceded by `!` (those are image syntax).
fn split_spans_link(spans: Vec<Span>) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if span.kind != SpanKind::Text || find_link(&span.text).is_none() {
            out.push(span);
            continue;
        }
        let mut rest = span.text.as_str();
        while let Some(caps) = find_link(rest) {
            let whole = caps.get(0).unwrap();
            let before = &rest[..whole.start()];
            if !before.is_empty() {
                out.push(Span::text(before));
            }
            out.push(Span::with_url(SpanKind::Link, &caps[1], &caps[2]));
            rest = &rest[whole.end()..];
        }
        if !rest.is_empty() {
            out.push(Span::text(rest));
        }
    }
    out
}

/// First link match in `text` that is not preceded by `!`.
fn find_link(text: &str) -> Option<regex::Captures<'_>> {
    let mut from = 0;
    while let Some(caps) = LINK_RE.captures_at(text, from) {
        let whole = caps.get(0).unwrap();
        let preceded_by_bang = whole.start() > 0 && text.as_bytes()[whole.start() - 1] == b'!';
        if !preceded_by_bang {
            return Some(caps);
        }
        // Resume after the `[` so a later overlapping candidate is found.
        from = whole.start() + 1;
    }
    None
}
