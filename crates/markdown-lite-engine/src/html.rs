//! HTML output for a parsed [`Document`].
//!
//! One recursive walk, appending into a single buffer. Text and URLs go
//! through [`escape_html`] exactly once; escaping is not idempotent, so nodes
//! must never be rendered twice.

use markdown_lite_syntax::{Block, Document, Inline};

/// Render a whole document. An empty document renders as the empty string.
pub fn render_document(doc: &Document) -> String {
    let mut out = String::new();
    for block in &doc.blocks {
        render_block(block, &mut out);
    }
    out
}

fn render_block(block: &Block, out: &mut String) {
    // Header depth is not tracked; every header is level one.
    let tag = match block {
        Block::Paragraph(_) => "p",
        Block::Header(_) => "h1",
    };
    wrap(tag, block.inlines(), out);
}

fn render_inline(node: &Inline, out: &mut String) {
    match node {
        Inline::Text(text) => escape_into(text, out),
        Inline::EscapedLiteral(c) => escape_into(c.encode_utf8(&mut [0; 4]), out),
        Inline::Emphasis(children) => wrap("em", children, out),
        Inline::Strong(children) => wrap("strong", children, out),
        Inline::Link { children, url } => {
            out.push_str("<a href=\"");
            escape_into(url, out);
            out.push_str("\">");
            render_inlines(children, out);
            out.push_str("</a>");
        }
    }
}

fn render_inlines(nodes: &[Inline], out: &mut String) {
    for node in nodes {
        render_inline(node, out);
    }
}

fn wrap(tag: &str, children: &[Inline], out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    render_inlines(children, out);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Escape `&`, `<`, `>`, `"` and `'` as HTML entities.
///
/// Used for both text content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(text, &mut out);
    out
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
