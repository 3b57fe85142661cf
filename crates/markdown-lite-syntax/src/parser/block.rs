//! Block-level grammar.
//!
//! A block is one line. It is a header when the line starts with `#`
//! immediately followed by whitespace; every other line is a paragraph.
//! `##`, `#word` and ` #` all fall through to paragraphs.

use super::inline::InlineParser;
use crate::cursor::Cursor;
use crate::lexer::TokenKind;
use crate::tree::{Block, Inline};

/// Parse one block starting at the cursor, consuming its trailing newline.
pub(super) fn block(cursor: &mut Cursor<'_, '_>) -> Block {
    if at_header_start(cursor) {
        cursor.advance(); // #
        cursor.advance(); // whitespace
        return Block::Header(line(cursor));
    }
    Block::Paragraph(line(cursor))
}

fn at_header_start(cursor: &Cursor<'_, '_>) -> bool {
    cursor.at_kind(TokenKind::Hash) && cursor.peek().is(TokenKind::Whitespace)
}

fn line(cursor: &mut Cursor<'_, '_>) -> Vec<Inline> {
    let inlines = InlineParser::new().parse_line(cursor);
    if cursor.at_kind(TokenKind::EndOfLine) {
        cursor.advance();
    }
    inlines
}
