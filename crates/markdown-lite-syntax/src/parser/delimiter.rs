//! # Underscore Delimiters
//!
//! `_` and `__` are resolved into [`Inline::Emphasis`] and [`Inline::Strong`]
//! while the line is being parsed, not in a second pass.
//!
//! ## The Delimiter Stack
//!
//! An opener does not produce a node. It pushes an [`OpenDelimiter`] that
//! remembers how many children existed when it was seen. A closer of the
//! same kind takes every child appended since then and wraps it. Openers
//! that never close are put back as literal text when the line ends.
//!
//! ## Rules, in order
//!
//! 1. An underscore with a digit directly on both sides (`12_34`) is always
//!    literal.
//! 2. It may close when the token before it is not whitespace-like. The
//!    closer pairs with the most recent opener of its own kind, provided the
//!    span is non-empty. A `_` span containing whitespace only closes when
//!    it sits inside an open `__`.
//! 3. If another open delimiter of the other kind was opened strictly inside
//!    the span, the two overlap without nesting (`_a __b_ c__`). Both openers
//!    and the closer are turned back into literal text.
//! 4. Otherwise it may open when the token after it is not whitespace-like.
//!    A `__` additionally refuses to open when an odd number of unescaped `_`
//!    stand between it and the next `__` on the line.

use super::inline::InlineParser;
use crate::cursor::Cursor;
use crate::lexer::{Token, TokenKind};
use crate::tree::Inline;

/// Which construct a delimiter produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Marker {
    /// `_`
    Em,
    /// `__`
    Strong,
}

impl Marker {
    fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Underscore => Some(Marker::Em),
            TokenKind::DoubleUnderscore => Some(Marker::Strong),
            _ => None,
        }
    }

    /// The source text of the marker.
    pub(super) fn literal(self) -> &'static str {
        match self {
            Marker::Em => "_",
            Marker::Strong => "__",
        }
    }

    fn wrap(self, children: Vec<Inline>) -> Inline {
        match self {
            Marker::Em => Inline::Emphasis(children),
            Marker::Strong => Inline::Strong(children),
        }
    }
}

/// A tentatively opened delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct OpenDelimiter {
    pub(super) marker: Marker,
    /// Child count when the delimiter was opened.
    pub(super) at: usize,
}

/// Open delimiters in source order. Recorded indices never decrease along
/// the stack.
#[derive(Debug, Default)]
pub(super) struct DelimiterStack {
    entries: Vec<OpenDelimiter>,
}

impl DelimiterStack {
    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(super) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empty the stack, yielding entries in source order.
    pub(super) fn drain(&mut self) -> std::vec::Drain<'_, OpenDelimiter> {
        self.entries.drain(..)
    }

    fn push(&mut self, marker: Marker, at: usize) {
        self.entries.push(OpenDelimiter { marker, at });
    }

    pub(super) fn remove(&mut self, idx: usize) -> OpenDelimiter {
        self.entries.remove(idx)
    }

    /// Move every entry from stack position `idx` onwards `by` children up.
    pub(super) fn shift_from(&mut self, idx: usize, by: usize) {
        for entry in self.entries.iter_mut().skip(idx) {
            entry.at += by;
        }
    }

    /// Cap every entry from stack position `idx` onwards at `len`.
    fn clamp_from(&mut self, idx: usize, len: usize) {
        for entry in self.entries.iter_mut().skip(idx) {
            entry.at = entry.at.min(len);
        }
    }

    /// Stack position of the most recently opened delimiter of `marker`.
    fn last_of(&self, marker: Marker) -> Option<usize> {
        self.entries.iter().rposition(|d| d.marker == marker)
    }

    /// Whether an open `__` was opened before child index `at`.
    fn strong_open_before(&self, at: usize) -> bool {
        self.entries
            .iter()
            .any(|d| d.marker == Marker::Strong && d.at < at)
    }

    /// Stack position of a delimiter of the other kind opened strictly
    /// inside `(opener.at, len)`.
    fn crossing(&self, opener_idx: usize, len: usize) -> Option<usize> {
        let opener = self.entries[opener_idx];
        self.entries.iter().enumerate().position(|(i, d)| {
            i != opener_idx && d.marker != opener.marker && d.at > opener.at && d.at < len
        })
    }
}

impl InlineParser {
    /// Handle the `_` or `__` under the cursor.
    pub(super) fn delimiter(&mut self, cursor: &mut Cursor<'_, '_>) {
        let token = cursor.current();
        let Some(marker) = Marker::from_kind(token.kind) else {
            self.literal(token.text, cursor);
            return;
        };
        let previous = cursor.previous();
        let next = cursor.peek();

        if between_digits(previous, next) {
            self.literal(token.text, cursor);
            return;
        }

        let touches_whitespace_before = previous.is_none_or(|t| t.kind.is_whitespace_like());
        if !touches_whitespace_before && self.try_close(marker, cursor) {
            return;
        }

        if next.kind.is_whitespace_like() || (marker == Marker::Strong && strong_breaks(cursor)) {
            self.literal(token.text, cursor);
        } else {
            self.delimiters.push(marker, self.children.len());
            cursor.advance();
        }
    }

    /// Try to close the most recent opener of `marker`.
    ///
    /// Returns `true` when the token was consumed, either as a closer or as
    /// literal text after a crossing was rejected.
    fn try_close(&mut self, marker: Marker, cursor: &mut Cursor<'_, '_>) -> bool {
        let Some(opener_idx) = self.delimiters.last_of(marker) else {
            return false;
        };
        let at = self.delimiters.entries[opener_idx].at;
        let span = &self.children[at.min(self.children.len())..];
        if span.is_empty() {
            return false;
        }

        if marker == Marker::Em
            && !self.delimiters.strong_open_before(at)
            && span.iter().any(Inline::is_text_with_whitespace)
        {
            return false;
        }

        if let Some(inner_idx) = self.delimiters.crossing(opener_idx, self.children.len()) {
            log::trace!(
                "rejecting crossing delimiters {:?} and {:?}",
                self.delimiters.entries[opener_idx],
                self.delimiters.entries[inner_idx]
            );
            // Stack order follows source order, so the inner entry sits
            // above the opener; restoring it first keeps `opener_idx` valid.
            self.restore_literal(inner_idx);
            self.restore_literal(opener_idx);
            self.literal(marker.literal(), cursor);
            return true;
        }

        let inner = self.children.split_off(at);
        self.children.push(marker.wrap(inner));
        self.delimiters.remove(opener_idx);
        self.delimiters.clamp_from(opener_idx, self.children.len());
        cursor.advance();
        true
    }
}

/// Whether the underscore sits between two digits, as in `12_34`.
fn between_digits(previous: Option<Token<'_>>, next: Token<'_>) -> bool {
    let left = previous.is_some_and(|t| {
        t.is(TokenKind::Text) && t.text.chars().next_back().is_some_and(|c| c.is_ascii_digit())
    });
    let right = next.is(TokenKind::Text)
        && next.text.chars().next().is_some_and(|c| c.is_ascii_digit());
    left && right
}

/// Whether a `__` at the cursor would leave an unpaired `_` before the next
/// `__` on the line.
///
/// Counts unescaped `_` tokens up to the next `__`. An odd count means the
/// two strong markers cannot nest around a balanced emphasis. Reaching the
/// end of the line first never breaks.
fn strong_breaks(cursor: &Cursor<'_, '_>) -> bool {
    let mut singles = 0usize;

    for pair in cursor.slice(cursor.index()..usize::MAX).windows(2) {
        let (previous, token) = (pair[0], pair[1]);
        match token.kind {
            kind if kind.is_line_end() => return false,
            TokenKind::DoubleUnderscore => return singles % 2 == 1,
            TokenKind::Underscore if !previous.is(TokenKind::Escape) => singles += 1,
            _ => {}
        }
    }

    false
}
