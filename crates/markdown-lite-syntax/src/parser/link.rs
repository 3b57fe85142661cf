//! Inline links: `[text](url)`.
//!
//! All three delimiters must appear on the current line, in order: `]`, then
//! `(` immediately after it, then `)`. Anything short of that leaves a
//! literal `[` and parsing resumes with the next token, so the rest of the
//! rejected span is handled token by token like ordinary text.
//!
//! Link text gets a reduced pass: escapes are honoured, everything else is
//! literal (no emphasis, no nested links). The URL is the raw concatenation
//! of the tokens between the parens.

use super::escape::BACKSLASH;
use super::inline::InlineParser;
use crate::cursor::Cursor;
use crate::lexer::{Token, TokenKind};
use crate::tree::Inline;

impl InlineParser {
    /// Handle the `[` under the cursor.
    pub(super) fn link_or_text(&mut self, cursor: &mut Cursor<'_, '_>) {
        match try_link(cursor) {
            Some(link) => self.children.push(link),
            None => self.literal("[", cursor),
        }
    }
}

/// Attempt a full link at the cursor. On failure the cursor is unchanged.
fn try_link(cursor: &mut Cursor<'_, '_>) -> Option<Inline> {
    let saved = cursor.index();

    let close_bracket = cursor.find_before_line_end(saved + 1, TokenKind::RightBracket)?;
    if !cursor.at(close_bracket + 1)?.is(TokenKind::LeftParen) {
        return None;
    }
    let close_paren = cursor.find_before_line_end(close_bracket + 2, TokenKind::RightParen)?;

    let children = link_text(cursor.slice(saved + 1..close_bracket));
    let url: String = cursor
        .slice(close_bracket + 2..close_paren)
        .iter()
        .map(|t| t.text)
        .collect();

    cursor.jump_to(close_paren + 1);
    Some(Inline::Link { children, url })
}

/// Build the children of a link from the tokens between its brackets.
fn link_text(tokens: &[Token<'_>]) -> Vec<Inline> {
    let mut children = Vec::with_capacity(tokens.len());
    let mut iter = tokens.iter();

    while let Some(token) = iter.next() {
        let text = match token.kind {
            TokenKind::Escape => iter.next().map_or(BACKSLASH, |escaped| escaped.text),
            _ => token.text,
        };
        children.push(Inline::text(text));
    }

    children
}

#[cfg(test)]
mod tests {
    use crate::cursor::Cursor;
    use crate::lexer::lex;
    use crate::parser::inline::InlineParser;
    use crate::tree::Inline;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn inlines(input: &str) -> Vec<Inline> {
        let tokens = lex(input);
        let mut cursor = Cursor::new(&tokens);
        InlineParser::new().parse_line(&mut cursor)
    }

    fn link(children: &[&str], url: &str) -> Inline {
        Inline::Link {
            children: children.iter().map(|s| Inline::text(*s)).collect(),
            url: url.to_string(),
        }
    }

    fn concat(nodes: &[Inline]) -> String {
        nodes
            .iter()
            .map(|n| match n {
                Inline::Text(t) => t.clone(),
                other => panic!("expected text, got {other:?}"),
            })
            .collect()
    }

    #[test]
    fn parse_simple_link() {
        assert_eq!(
            inlines("[google](https://google.com)"),
            vec![link(&["google"], "https://google.com")]
        );
    }

    #[test]
    fn url_is_verbatim() {
        assert_eq!(
            inlines("[x](a_b\\c d#e)"),
            vec![link(&["x"], "a_b\\c d#e")]
        );
    }

    #[test]
    fn link_text_keeps_underscores_literal() {
        assert_eq!(
            inlines("[_a_](u)"),
            vec![link(&["_", "a", "_"], "u")]
        );
    }

    #[test]
    fn escapes_inside_link_text() {
        assert_eq!(
            inlines("[go\\_og\\_le](url)"),
            vec![link(&["go", "_", "og", "_", "le"], "url")]
        );
    }

    #[test]
    fn link_text_trailing_escape_is_backslash() {
        assert_eq!(inlines("[a\\](u)"), vec![link(&["a", "\\"], "u")]);
    }

    #[test]
    fn escape_before_text_in_link_drops_backslash() {
        assert_eq!(inlines("[\\hello](u)"), vec![link(&["hello"], "u")]);
    }

    #[test]
    fn links_in_a_row() {
        assert_eq!(
            inlines("[a](1)[b](2)"),
            vec![link(&["a"], "1"), link(&["b"], "2")]
        );
    }

    #[rstest]
    #[case("[text(https://url)")]
    #[case("[text]url)")]
    #[case("[text](url")]
    #[case("[text] (url)")]
    #[case("[a\n](b)")]
    #[case("[")]
    fn malformed_links_stay_literal(#[case] input: &str) {
        let nodes = inlines(input);
        assert!(nodes.iter().all(|n| matches!(n, Inline::Text(_))));
        let line = input.split('\n').next().unwrap_or_default();
        assert_eq!(concat(&nodes), line);
    }

    #[test]
    fn first_bracket_claims_the_closest_close() {
        assert_eq!(
            inlines("[a [b](c)"),
            vec![link(&["a", " ", "[", "b"], "c")]
        );
    }

    #[test]
    fn rejected_bracket_resumes_token_by_token() {
        assert_eq!(
            inlines("[a] [b](c)"),
            vec![
                Inline::text("["),
                Inline::text("a"),
                Inline::text("]"),
                Inline::text(" "),
                link(&["b"], "c"),
            ]
        );
    }
}
