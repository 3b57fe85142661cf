//! # markdown-lite-engine
//!
//! String-to-string rendering of the markdown-lite dialect to HTML.
//!
//! ```
//! use markdown_lite_engine::render;
//!
//! assert_eq!(render("# Hello world").unwrap(), "<h1>Hello world</h1>");
//! assert_eq!(render("a _b_ c").unwrap(), "<p>a <em>b</em> c</p>");
//! assert!(render(None).is_err());
//! ```
//!
//! Every present input renders; malformed markup degrades to its literal
//! characters. The stages are also reachable on their own through
//! [`markdown_lite_syntax`] and [`html`].

pub mod error;
pub mod html;

pub use error::RenderError;
pub use html::{escape_html, render_document};
pub use markdown_lite_syntax::{Block, Document, Inline};

use markdown_lite_syntax::{lex, parse_tokens};

/// Render markdown text to HTML.
///
/// Accepts `&str` or `Option<&str>`. A missing input fails with
/// [`RenderError::MissingInput`] before any tokenizing happens; the empty
/// string renders as the empty string.
pub fn render<'a>(text: impl Into<Option<&'a str>>) -> Result<String, RenderError> {
    let text = text.into().ok_or(RenderError::MissingInput)?;
    Ok(to_html(text))
}

/// Render present markdown text to HTML.
pub fn to_html(text: &str) -> String {
    let tokens = lex(text);
    let doc = parse_tokens(&tokens);
    log::debug!(
        "rendering {} bytes: {} tokens, {} blocks",
        text.len(),
        tokens.len(),
        doc.blocks.len()
    );
    render_document(&doc)
}
