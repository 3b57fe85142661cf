//! # Inline-Level Grammar
//!
//! Inline parsing runs over the tokens of one line and stops at the first
//! newline or end of file. Each token is dispatched on its kind:
//!
//! | Token | Handler |
//! |-------|---------|
//! | Text, Whitespace | literal text |
//! | `\` | [`escape`](super::escape) |
//! | `[` | [`link`](super::link) |
//! | `_`, `__` | [`delimiter`](super::delimiter) |
//! | anything else | literal text |
//!
//! Underscores do not produce nodes when they open. They are recorded on the
//! delimiter stack with the child count at that moment, and either wrap the
//! children appended since then when a matching closer arrives, or are put
//! back as literal text when the line ends.

use super::delimiter::DelimiterStack;
use crate::cursor::Cursor;
use crate::lexer::TokenKind;
use crate::tree::Inline;

/// The in-progress state of one line's inline parse.
pub(super) struct InlineParser {
    pub(super) children: Vec<Inline>,
    pub(super) delimiters: DelimiterStack,
}

impl InlineParser {
    pub(super) fn new() -> Self {
        Self {
            children: Vec::new(),
            delimiters: DelimiterStack::default(),
        }
    }

    /// Parse inline content until the end of the current line.
    ///
    /// The terminating newline is left under the cursor for the block parser.
    pub(super) fn parse_line(mut self, cursor: &mut Cursor<'_, '_>) -> Vec<Inline> {
        while !cursor.is_at_end() && !cursor.current().kind.is_line_end() {
            self.inline_element(cursor);
        }
        self.flush_unmatched();
        self.children
    }

    fn inline_element(&mut self, cursor: &mut Cursor<'_, '_>) {
        let token = cursor.current();
        match token.kind {
            TokenKind::Escape => self.escape(cursor),
            TokenKind::LeftBracket => self.link_or_text(cursor),
            TokenKind::Underscore | TokenKind::DoubleUnderscore => self.delimiter(cursor),
            _ => self.literal(token.text, cursor),
        }
    }

    /// Append `text` as a literal node and step past the current token.
    pub(super) fn literal(&mut self, text: &str, cursor: &mut Cursor<'_, '_>) {
        self.children.push(Inline::text(text));
        cursor.advance();
    }

    /// Turn every still-open delimiter back into its literal underscores.
    ///
    /// Equivalent to calling [`Self::restore_literal`] from the last entry
    /// backwards, done as a single merge since recorded indices are sorted.
    fn flush_unmatched(&mut self) {
        if self.delimiters.is_empty() {
            return;
        }
        log::trace!("flushing {} unmatched delimiters", self.delimiters.len());

        let children = std::mem::take(&mut self.children);
        let mut merged = Vec::with_capacity(children.len() + self.delimiters.len());
        let mut open = self.delimiters.drain().peekable();

        for (i, child) in children.into_iter().enumerate() {
            while let Some(d) = open.next_if(|d| d.at <= i) {
                merged.push(Inline::text(d.marker.literal()));
            }
            merged.push(child);
        }
        merged.extend(open.map(|d| Inline::text(d.marker.literal())));

        self.children = merged;
    }

    /// Remove the delimiter at stack position `idx` and reinsert its literal
    /// text at the child index it was opened at.
    ///
    /// Delimiters opened after it sit later in the source, so their recorded
    /// indices move up by one.
    pub(super) fn restore_literal(&mut self, idx: usize) {
        let open = self.delimiters.remove(idx);
        let at = open.at.min(self.children.len());
        self.children.insert(at, Inline::text(open.marker.literal()));
        self.delimiters.shift_from(idx, 1);
    }
}
