//! Error types for Markdown conversion.
//!
//! All faults are deterministic parse/structural errors: a malformed
//! document always fails the same way, and a failure aborts conversion of
//! the whole document. There is no partial-document recovery.

/// Errors produced while converting a Markdown document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    /// An inline delimiter (`**`, `_`, or `` ` ``) is unmatched in a run
    /// of text, i.e. it occurs an odd number of times.
    #[error("unclosed inline delimiter in {text:?}")]
    UnclosedDelimiter {
        /// The original text containing the unmatched delimiter.
        text: String,
    },

    /// An ordered-list block's numbering is not exactly sequential
    /// starting at 1.
    #[error("ordered list numbering out of sequence at {line:?}")]
    SequenceMismatch {
        /// The first line that breaks the sequence.
        line: String,
    },

    /// No line starting with `# ` was found when extracting a page title.
    #[error("no title line starting with \"# \" found in document")]
    NoTitleFound,
}
