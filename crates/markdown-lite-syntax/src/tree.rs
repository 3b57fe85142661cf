//! Document tree produced by the parser.
//!
//! The tree is plain owned data: a [`Document`] owns its [`Block`]s, each
//! block owns its [`Inline`] nodes. Both node enums are closed, so the
//! renderer's exhaustive matches break at compile time when a variant is
//! added.

/// The root of a parsed document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// A top-level unit of the document. Each source line yields at most one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Vec<Inline>),
    /// A `# ` line. Only one level exists in this dialect.
    Header(Vec<Inline>),
}

impl Block {
    /// The inline content of the block, whatever its kind.
    pub fn inlines(&self) -> &[Inline] {
        match self {
            Block::Paragraph(inlines) | Block::Header(inlines) => inlines,
        }
    }
}

/// Inline content within a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Literal text, escaped on output.
    Text(String),
    /// `_..._`
    Emphasis(Vec<Inline>),
    /// `__...__`
    Strong(Vec<Inline>),
    /// `[children](url)`. The URL is kept verbatim.
    Link { children: Vec<Inline>, url: String },
    /// A single escaped character. The parser emits escapes as `Text`.
    EscapedLiteral(char),
}

impl Inline {
    pub fn text(value: impl Into<String>) -> Self {
        Inline::Text(value.into())
    }

    /// True for a [`Inline::Text`] node containing any whitespace character.
    pub fn is_text_with_whitespace(&self) -> bool {
        matches!(self, Inline::Text(t) if t.chars().any(char::is_whitespace))
    }
}
