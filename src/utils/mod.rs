//! Utility modules for browser, network and text operations.
//!
//! Provides:
//! - [`dom`] - Window, storage, focus and hash helpers
//! - [`GlooTransport`] - Browser HTTP transport with timeout
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization
//! - [`logger`] - `log` backend for the browser console
//! - [`url`] - Lenient parsing of author-supplied links

pub mod dom;
mod fetch;
pub mod logger;
mod markdown;
pub mod url;

pub use fetch::GlooTransport;
pub use markdown::markdown_to_html;
