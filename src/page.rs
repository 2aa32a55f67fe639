//! Page-assembly helpers for the site-generation driver.
//!
//! Pure string operations only: title extraction from a document, template
//! placeholder substitution, and base-path rewriting of root-relative
//! links. File and directory handling belong to the surrounding driver,
//! not to this crate.

use crate::error::MarkdownError;

/// Extract the page title: the text of the first line starting with the
/// literal `# ` prefix (exactly one hash), trimmed.
///
/// # Errors
/// [`MarkdownError::NoTitleFound`] if no such line exists.
///
/// # Example
/// ```
/// use sitemark::page::extract_title;
///
/// assert_eq!(extract_title("intro\n\n# The Title\n\nbody").unwrap(), "The Title");
/// ```
pub fn extract_title(document: &str) -> Result<&str, MarkdownError> {
    document
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(str::trim)
        .ok_or(MarkdownError::NoTitleFound)
}

/// Substitute a title and rendered content into a page template.
///
/// Replaces every `{{ Title }}` and `{{ Content }}` placeholder token.
pub fn render_page(template: &str, title: &str, content: &str) -> String {
    template
        .replace("{{ Title }}", title)
        .replace("{{ Content }}", content)
}

/// Prefix root-relative `href`/`src` attribute values with `base_path`.
///
/// `base_path` replaces the leading `/`, so it should itself start and end
/// with `/` (e.g. `"/blog/"`).
pub fn rewrite_base_path(html: &str, base_path: &str) -> String {
    html.replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}"))
}
