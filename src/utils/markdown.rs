//! Markdown rendering utilities.
//!
//! Topic bodies are authored as Markdown by trainers. They are rendered with
//! `comrak` and sanitized with `ammonia` before reaching `inner_html`.

use comrak::Options;

/// Convert markdown content to sanitized HTML.
///
/// Supports strikethrough, tables, autolinks, task lists and footnotes.
/// Raw HTML in the source survives only as far as `ammonia` allows.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;

    let html_output = comrak::markdown_to_html(markdown, &options);

    // Sanitize HTML to prevent XSS attacks
    ammonia::clean(&html_output)
}
