//! # markdown-lite-syntax
//!
//! Tokenizer and parser for a small Markdown dialect: `# ` headers,
//! paragraphs, `_emphasis_`, `__strong__`, `[links](url)` and backslash
//! escapes.
//!
//! ## Architecture Overview
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → Document
//!               (Logos)          (blocks, inline handlers)
//! ```
//!
//! ### 1. Lexer ([`lexer`] module)
//!
//! Splits input into context-free tokens and appends an end-of-file
//! sentinel. Every byte of the input lands in exactly one token.
//!
//! ```text
//! "# Hi _x_" → [Hash, Whitespace, Text("Hi"), Whitespace,
//!               Underscore, Text("x"), Underscore, EndOfFile]
//! ```
//!
//! ### 2. Cursor ([`cursor`] module)
//!
//! A cheap, copyable position over the token slice. Handlers look ahead and
//! roll back by saving and restoring an integer index.
//!
//! ### 3. Parser ([`parser`] module)
//!
//! Splits the tokens into one block per line and resolves each line's inline
//! content, including the underscore delimiter matching, in a single pass.
//!
//! ### 4. Tree ([`tree`] module)
//!
//! Plain owned enums ready for rendering.
//!
//! ## Quick Start
//!
//! ```
//! use markdown_lite_syntax::{parse, Block, Inline};
//!
//! let doc = parse("a _b_");
//! assert_eq!(
//!     doc.blocks,
//!     vec![Block::Paragraph(vec![
//!         Inline::text("a"),
//!         Inline::text(" "),
//!         Inline::Emphasis(vec![Inline::text("b")]),
//!     ])]
//! );
//! ```

pub mod cursor;
pub mod lexer;
pub mod parser;
pub mod tree;

pub use lexer::{Token, TokenKind, lex};
pub use parser::{parse, parse_tokens};
pub use tree::{Block, Document, Inline};
