use crate::lexer::{Token, TokenKind};

/// A read-only position pointer over a lexed token sequence.
///
/// The slice is expected to end with the [`TokenKind::EndOfFile`] sentinel
/// (as produced by [`lex`](crate::lexer::lex)). Reads past the end return the
/// sentinel instead of failing, which keeps every parser loop total.
///
/// The position is a plain integer, so speculative parsing is a matter of
/// saving [`Cursor::index`] and restoring it with [`Cursor::jump_to`].
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'t, 'src> {
    tokens: &'t [Token<'src>],
    index: usize,
}

impl<'t, 'src> Cursor<'t, 'src> {
    /// Creates a cursor at the first token.
    pub fn new(tokens: &'t [Token<'src>]) -> Self {
        Self { tokens, index: 0 }
    }

    /// Current position in the token slice.
    pub fn index(&self) -> usize {
        self.index
    }

    /// True once the cursor sits on the final (sentinel) token or beyond.
    pub fn is_at_end(&self) -> bool {
        self.index + 1 >= self.tokens.len()
    }

    /// The token under the cursor, or the sentinel once at the end.
    pub fn current(&self) -> Token<'src> {
        if self.is_at_end() {
            self.last()
        } else {
            self.tokens[self.index]
        }
    }

    /// The token after the cursor, or the sentinel.
    pub fn peek(&self) -> Token<'src> {
        self.at(self.index + 1).unwrap_or_else(|| self.last())
    }

    /// The token before the cursor; `None` at the start of input.
    pub fn previous(&self) -> Option<Token<'src>> {
        self.index.checked_sub(1).and_then(|i| self.at(i))
    }

    /// The token at an absolute position, if it exists.
    pub fn at(&self, index: usize) -> Option<Token<'src>> {
        self.tokens.get(index).copied()
    }

    /// Whether the current token has the given kind.
    pub fn at_kind(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    /// Moves forward by one token unless already at the end.
    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.index += 1;
        }
    }

    /// Moves to `index`, clamped into `[0, len - 1]`.
    pub fn jump_to(&mut self, index: usize) {
        self.index = index.min(self.tokens.len().saturating_sub(1));
    }

    /// Finds the first token of `kind` at or after `from`, giving up at the
    /// first line or file end.
    pub fn find_before_line_end(&self, from: usize, kind: TokenKind) -> Option<usize> {
        self.tokens
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, t)| t.kind == kind || t.kind.is_line_end())
            .filter(|(_, t)| t.kind == kind)
            .map(|(i, _)| i)
    }

    /// The tokens in `range`, clamped to the slice.
    pub fn slice(&self, range: std::ops::Range<usize>) -> &'t [Token<'src>] {
        let end = range.end.min(self.tokens.len());
        let start = range.start.min(end);
        &self.tokens[start..end]
    }

    fn last(&self) -> Token<'src> {
        self.tokens.last().copied().unwrap_or(Token::EOF)
    }
}
