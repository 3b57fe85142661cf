//! # Parser - Tokens to Document Tree
//!
//! The parser walks the token sequence once, left to right, and builds the
//! [`Document`] bottom-up.
//!
//! ## Structure
//!
//! - [`block`] splits the stream into lines and decides paragraph vs header
//! - [`inline`] dispatches each token of a line to a handler and owns the
//!   in-progress child list
//! - [`escape`], [`link`] and [`delimiter`] are the handlers for `\`, `[`
//!   and `_`/`__`
//!
//! ## Totality
//!
//! Parsing never fails. Anything that does not resolve into a construct -
//! an unclosed link, an unmatched underscore, crossing emphasis - degrades to
//! the literal characters it was written with.
//!
//! ## Speculation
//!
//! Lookahead is done through the [`Cursor`]: handlers save its integer
//! position, scan forward, and jump back if the pattern does not complete.
//! Tokens never change, so no copying is involved.

mod block;
mod delimiter;
mod escape;
mod inline;
mod link;

use crate::cursor::Cursor;
use crate::lexer::{Token, TokenKind, lex};
use crate::tree::Document;

/// Parse source text into a document tree.
pub fn parse(input: &str) -> Document {
    let tokens = lex(input);
    parse_tokens(&tokens)
}

/// Parse an already lexed token sequence (terminated by the EOF sentinel).
pub fn parse_tokens(tokens: &[Token<'_>]) -> Document {
    let mut cursor = Cursor::new(tokens);
    let mut blocks = Vec::new();

    while !cursor.is_at_end() {
        // Blank lines only separate blocks.
        if cursor.at_kind(TokenKind::EndOfLine) {
            cursor.advance();
            continue;
        }
        blocks.push(block::block(&mut cursor));
    }

    Document::new(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Block, Inline};
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Inline {
        Inline::text(s)
    }

    fn paragraph(inlines: Vec<Inline>) -> Block {
        Block::Paragraph(inlines)
    }

    #[test]
    fn empty_input_has_no_blocks() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n\n").is_empty());
    }

    #[test]
    fn each_line_is_a_block() {
        assert_eq!(
            parse("hello\n\nworld\nagain").blocks,
            vec![
                paragraph(vec![text("hello")]),
                paragraph(vec![text("world")]),
                paragraph(vec![text("again")]),
            ]
        );
    }

    #[test]
    fn nested_strong_and_emphasis() {
        assert_eq!(
            parse("__a _b_ c__").blocks,
            vec![paragraph(vec![Inline::Strong(vec![
                text("a"),
                text(" "),
                Inline::Emphasis(vec![text("b")]),
                text(" "),
                text("c"),
            ])])]
        );
    }

    #[test]
    fn header_with_link() {
        assert_eq!(
            parse("# see [g](u)").blocks,
            vec![Block::Header(vec![
                text("see"),
                text(" "),
                Inline::Link {
                    children: vec![text("g")],
                    url: "u".into(),
                },
            ])]
        );
    }

    #[test]
    fn parse_tokens_matches_parse() {
        let input = "# a\n_b_ [c](d)\n\n\\_";
        assert_eq!(parse_tokens(&lex(input)), parse(input));
    }
}
