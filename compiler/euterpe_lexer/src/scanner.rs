//! Single-pass scanner producing one token per character.
//!
//! The scanner walks a [`Cursor`] left to right and classifies each
//! character with a [`Ruleset`], feeding it the kind of the token it emitted
//! last. That one kind is the only history the scanner keeps.
//!
//! # States
//!
//! ```text
//! Scanning --(char consumed)--> Scanning
//! Scanning --(input exhausted)--> AtEnd --(EOF emitted)--> Done
//! ```
//!
//! `Done` is terminal. Asking for another token there is a caller bug and
//! panics; iterating simply stops.

use std::iter::FusedIterator;

use euterpe_ir::{Span, Token, TokenKind};

use crate::cursor::Cursor;
use crate::ruleset::Ruleset;

/// Where a [`Scanner`] is in its run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScanState {
    /// Characters remain.
    Scanning,
    /// Input exhausted; the end-marker has not been emitted yet.
    AtEnd,
    /// The end-marker has been emitted.
    Done,
}

/// Pull-based tokenizer over one input string.
pub struct Scanner<'src, 'r> {
    cursor: Cursor<'src>,
    ruleset: &'r Ruleset,
    /// Kind of the last emitted token; `None` before the first one.
    prev: Option<TokenKind>,
    skip_invalid: bool,
    done: bool,
}

impl<'src, 'r> Scanner<'src, 'r> {
    /// Create a scanner positioned at the start of `source`.
    pub fn new(source: &'src str, ruleset: &'r Ruleset) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            ruleset,
            prev: None,
            skip_invalid: false,
            done: false,
        }
    }

    /// Drop unrecognized characters instead of emitting `INVALID` tokens.
    ///
    /// A dropped character does not become the context for the next one.
    #[must_use]
    pub fn skipping_invalid(mut self) -> Self {
        self.skip_invalid = true;
        self
    }

    pub fn state(&self) -> ScanState {
        if self.done {
            ScanState::Done
        } else if self.cursor.is_eof() {
            ScanState::AtEnd
        } else {
            ScanState::Scanning
        }
    }

    /// Byte offset of the next character to scan.
    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    /// Kind of the most recently emitted token.
    pub fn prev_kind(&self) -> Option<TokenKind> {
        self.prev
    }

    /// Produce the next token.
    ///
    /// Returns the `EOF` end-marker exactly once, after the last character.
    ///
    /// # Panics
    ///
    /// Panics if called again after the end-marker was returned.
    pub fn next_token(&mut self) -> Token {
        assert!(
            !self.done,
            "Scanner::next_token called after the end-marker was emitted"
        );
        loop {
            let start = self.cursor.pos();
            let Some(ch) = self.cursor.advance() else {
                self.done = true;
                self.prev = Some(TokenKind::Eof);
                tracing::trace!(offset = start, "EOF");
                return Token::eof(start);
            };

            let kind = self.ruleset.kind_of(ch, self.prev);
            if kind == TokenKind::Invalid && self.skip_invalid {
                tracing::trace!(offset = start, ?ch, "skipped invalid character");
                continue;
            }

            self.prev = Some(kind);
            let span = Span::new(start, self.cursor.pos());
            tracing::trace!(%kind, ?ch, %span, "token");
            return Token::new(kind, self.cursor.slice(span), span);
        }
    }
}

impl Iterator for Scanner<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            None
        } else {
            Some(self.next_token())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        // Every remaining char yields at most one token, plus the end-marker.
        let remaining = self.cursor.rest().len();
        let lower = if self.skip_invalid {
            1
        } else {
            remaining.div_ceil(4) + 1
        };
        (lower, remaining.checked_add(1))
    }
}

impl FusedIterator for Scanner<'_, '_> {}

#[cfg(test)]
mod tests;
