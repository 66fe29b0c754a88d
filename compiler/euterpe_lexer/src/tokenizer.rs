//! Whole-input tokenization.

use euterpe_ir::{TokenKind, TokenList};

use crate::lex_error::LexError;
use crate::options::{InvalidPolicy, LexOptions};
use crate::ruleset::Ruleset;
use crate::scanner::Scanner;

/// Turns notation strings into token lists.
///
/// A `Tokenizer` only borrows its ruleset; every call builds a fresh
/// [`Scanner`], so nothing carries over from one input to the next.
#[derive(Clone, Copy, Debug)]
pub struct Tokenizer<'r> {
    ruleset: &'r Ruleset,
}

impl Tokenizer<'static> {
    /// A tokenizer using the canonical Euterpean ruleset.
    pub fn new() -> Self {
        Tokenizer {
            ruleset: Ruleset::euterpean(),
        }
    }
}

impl Default for Tokenizer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> Tokenizer<'r> {
    pub fn with_ruleset(ruleset: &'r Ruleset) -> Self {
        Tokenizer { ruleset }
    }

    pub fn ruleset(&self) -> &'r Ruleset {
        self.ruleset
    }

    /// Start a pull-based scan over `input`.
    pub fn scanner<'src>(&self, input: &'src str) -> Scanner<'src, 'r> {
        Scanner::new(input, self.ruleset)
    }

    /// Tokenize `input`, keeping unrecognized characters as `INVALID` tokens.
    ///
    /// The result holds one token per character followed by one `EOF`.
    /// Never fails.
    #[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
    pub fn tokenize(&self, input: &str) -> TokenList {
        let tokens: TokenList = self.scanner(input).collect();
        tracing::debug!(tokens = tokens.len(), "tokenized");
        tokens
    }

    /// Tokenize `input` under the caller's [`LexOptions`].
    ///
    /// Only [`InvalidPolicy::Reject`] can produce an error.
    #[tracing::instrument(level = "debug", skip_all, fields(len = input.len(), policy = ?options.invalid))]
    pub fn tokenize_with(&self, input: &str, options: &LexOptions) -> Result<TokenList, LexError> {
        let mut scanner = self.scanner(input);
        if options.invalid == InvalidPolicy::Skip {
            scanner = scanner.skipping_invalid();
        }

        let mut tokens = TokenList::with_capacity(input.len() + 1);
        for token in scanner {
            if token.kind == TokenKind::Invalid && options.invalid == InvalidPolicy::Reject {
                let err = LexError::invalid_character(&token);
                tracing::debug!(%err, "rejecting input");
                return Err(err);
            }
            tokens.push(token);
        }

        tracing::debug!(tokens = tokens.len(), "tokenized");
        Ok(tokens)
    }
}
