//! Token types for the Euterpe lexer.

mod kind;
mod list;

pub use kind::TokenKind;
pub use list::TokenList;

use std::fmt;

use super::Span;

/// A classified lexeme with its span in the source.
///
/// `value` is the exact source text the token came from: a single character
/// for every kind except [`TokenKind::Eof`], whose value is empty.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub value: Box<str>,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, value: &str, span: Span) -> Self {
        debug_assert_eq!(
            value.is_empty(),
            kind.is_eof(),
            "only the end-marker may have an empty value"
        );
        debug_assert_eq!(
            span.is_empty(),
            kind.is_eof(),
            "only the end-marker may have an empty span"
        );
        Token {
            kind,
            value: value.into(),
            span,
        }
    }

    /// The end-marker token, positioned at `offset` (the input length).
    #[inline]
    pub fn eof(offset: usize) -> Self {
        Token {
            kind: TokenKind::Eof,
            value: Box::default(),
            span: Span::point(offset),
        }
    }

    /// `false` only for tokens no rule recognized.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.kind.is_invalid()
    }

    /// The source character, or `None` for the end-marker.
    pub fn ch(&self) -> Option<char> {
        self.value.chars().next()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}) @ {}", self.kind, &*self.value, self.span)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<T: {}, v: {}>", self.kind, self.value.escape_debug())
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Token, TokenKind};
    crate::static_assert_size!(TokenKind, 1);
    // Box<str> (16) + Span (16) + kind (1, padded to 8)
    crate::static_assert_size!(Token, 40);
}
