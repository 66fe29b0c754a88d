//! Caller policy for tokenization.

/// What to do with characters no rule recognizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InvalidPolicy {
    /// Emit them as `INVALID` tokens and keep scanning.
    #[default]
    Keep,
    /// Drop them. The next character is resolved against the last token
    /// that was kept, as if the dropped character were never there.
    Skip,
    /// Stop at the first one with [`LexError::InvalidCharacter`](crate::LexError).
    Reject,
}

/// Options for [`Tokenizer::tokenize_with`](crate::Tokenizer::tokenize_with).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LexOptions {
    pub invalid: InvalidPolicy,
}

impl LexOptions {
    /// Reject any input containing an unrecognized character.
    pub const fn strict() -> Self {
        LexOptions {
            invalid: InvalidPolicy::Reject,
        }
    }

    #[must_use]
    pub const fn with_invalid(mut self, invalid: InvalidPolicy) -> Self {
        self.invalid = invalid;
        self
    }
}
