//! Lexer error types.
//!
//! Bad characters are data, not errors: by default they travel through the
//! token stream as `INVALID` tokens. A `LexError` only appears when the
//! caller asks for it through [`InvalidPolicy::Reject`](crate::InvalidPolicy).

use euterpe_ir::{Span, Token};

#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LexError {
    /// A character matched no rule and the caller rejects such input.
    #[error("invalid character {lexeme:?} at {span}")]
    InvalidCharacter { lexeme: Box<str>, span: Span },
}

impl LexError {
    /// Build an `InvalidCharacter` error from the offending token.
    pub fn invalid_character(token: &Token) -> Self {
        LexError::InvalidCharacter {
            lexeme: token.value.clone(),
            span: token.span,
        }
    }
}
