//! # Lexer - Tokenizing Markdown Source
//!
//! The first stage of the pipeline: breaking source text into a flat sequence
//! of [`Token`]s using the [Logos] lexer generator.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## Token Design
//!
//! Tokens are **context-free**. The lexer does not know whether `#` starts a
//! header or whether `_` opens emphasis - the parser decides that from the
//! token's position. Every special character gets its own token:
//!
//! - `\n` → [`TokenKind::EndOfLine`]
//! - space, tab → [`TokenKind::Whitespace`] (one token per character)
//! - `\` → [`TokenKind::Escape`]
//! - `#`, `[`, `]`, `(`, `)` → one token each
//! - `__` → [`TokenKind::DoubleUnderscore`], `_` → [`TokenKind::Underscore`]
//!
//! Everything else is grouped into maximal [`TokenKind::Text`] runs.
//!
//! ## The Sentinel
//!
//! [`lex`] always terminates the sequence with exactly one
//! [`TokenKind::EndOfFile`] token whose text is empty, so the parser never
//! has to special-case running off the end of the slice.
//!
//! ```
//! use markdown_lite_syntax::lexer::{lex, TokenKind};
//!
//! let tokens = lex("a_b");
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Text, TokenKind::Underscore, TokenKind::Text, TokenKind::EndOfFile]
//! );
//! ```

use logos::Logos;

/// Raw token kinds produced by the Logos lexer.
///
/// Logos needs its own enum to derive on; there is no pattern for the
/// end-of-file sentinel, so the public [`TokenKind`] is kept separate and
/// [`RawToken::to_token_kind`] converts between them.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    /// A single space or tab. Runs are not coalesced.
    #[regex(r"[ \t]")]
    Whitespace,

    #[token("\n")]
    Newline,

    #[token("\\")]
    Backslash,

    #[token("#")]
    Hash,

    /// `__` wins over `_` by longest match, so `___` lexes as `__` then `_`.
    #[token("__")]
    DoubleUnderscore,

    #[token("_")]
    Underscore,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    /// Plain text - anything not matched by other rules
    #[regex(r"[^\n \t\\#\[\]()_]+")]
    Text,
}

impl RawToken {
    fn to_token_kind(self) -> TokenKind {
        match self {
            RawToken::Whitespace => TokenKind::Whitespace,
            RawToken::Newline => TokenKind::EndOfLine,
            RawToken::Backslash => TokenKind::Escape,
            RawToken::Hash => TokenKind::Hash,
            RawToken::DoubleUnderscore => TokenKind::DoubleUnderscore,
            RawToken::Underscore => TokenKind::Underscore,
            RawToken::LBracket => TokenKind::LeftBracket,
            RawToken::RBracket => TokenKind::RightBracket,
            RawToken::LParen => TokenKind::LeftParen,
            RawToken::RParen => TokenKind::RightParen,
            RawToken::Text => TokenKind::Text,
        }
    }
}

/// The kind of a lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A maximal run of non-special characters
    Text,
    /// A single space or tab
    Whitespace,
    /// `\n`
    EndOfLine,
    /// Sentinel closing every token sequence; its text is empty
    EndOfFile,
    /// `\`
    Escape,
    /// `#`
    Hash,
    /// `_`
    Underscore,
    /// `__`
    DoubleUnderscore,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl TokenKind {
    /// Whether an underscore next to this token counts as touching whitespace.
    ///
    /// Start-of-input is handled by callers (there is no token to ask).
    pub fn is_whitespace_like(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::EndOfLine | TokenKind::EndOfFile
        )
    }

    /// True for the two kinds that end a block's inline content.
    pub fn is_line_end(self) -> bool {
        matches!(self, TokenKind::EndOfLine | TokenKind::EndOfFile)
    }
}

/// A lexed token with its kind and exact source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub const EOF: Token<'static> = Token {
        kind: TokenKind::EndOfFile,
        text: "",
    };

    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// Lex the input into a sequence of tokens terminated by [`Token::EOF`].
///
/// Never fails: every byte of `input` lands in exactly one token.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(input);

    while let Some(result) = lexer.next() {
        let text = lexer.slice();
        let kind = match result {
            Ok(raw) => raw.to_token_kind(),
            // Unreachable with the rules above; degrade to text regardless.
            Err(()) => TokenKind::Text,
        };
        tokens.push(Token { kind, text });
    }

    tokens.push(Token::EOF);
    tokens
}
