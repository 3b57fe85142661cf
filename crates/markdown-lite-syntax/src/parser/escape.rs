//! Backslash escapes.
//!
//! The escape looks at the token after the backslash:
//!
//! - line or file end: the backslash is kept on its own
//! - another backslash: the pair collapses to one backslash
//! - a text run: the backslash is kept in front of the whole run, so `\hello`
//!   stays `\hello`
//! - any special token (`_`, `__`, `#`, brackets, parens, whitespace): the
//!   token is emitted as plain text and the backslash is dropped

use super::inline::InlineParser;
use crate::cursor::Cursor;
use crate::lexer::TokenKind;
use crate::tree::Inline;

pub(super) const BACKSLASH: &str = "\\";

impl InlineParser {
    /// Handle the escape under the cursor. Appends exactly one text node.
    pub(super) fn escape(&mut self, cursor: &mut Cursor<'_, '_>) {
        cursor.advance(); // \
        let next = cursor.current();

        match next.kind {
            kind if kind.is_line_end() => {
                self.children.push(Inline::text(BACKSLASH));
            }
            TokenKind::Escape => self.literal(BACKSLASH, cursor),
            TokenKind::Text => {
                self.children.push(Inline::Text(format!("\\{}", next.text)));
                cursor.advance();
            }
            _ => self.literal(next.text, cursor),
        }
    }
}
